use super::*;
use crate::source::{SourceEntry, SourceSeason};
use proptest::prelude::*;

/// 大文字小文字が混在した季節名
fn season_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,12}".prop_map(|s| s)
}

fn tags_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9 ]{1,10}", 0..30)
}

proptest! {
    /// season はどんな大小文字でも小文字化される
    #[test]
    fn prop_season_is_lowercased(season in season_strategy(), year in 1900i64..2100) {
        let entry = SourceEntry {
            anime_season: Some(SourceSeason { season: Some(season.clone()), year: Some(year) }),
            ..Default::default()
        };
        let record = ImportRecord::from_entry(&entry);

        prop_assert_eq!(&record.anime_season.season, &season.to_lowercase());
        prop_assert_eq!(record.anime_season.year, year);
    }

    /// tags は最大10件かつ元の順序のプレフィックス
    #[test]
    fn prop_tags_are_bounded_prefix(tags in tags_strategy()) {
        let entry = SourceEntry { tags: Some(tags.clone()), ..Default::default() };
        let record = ImportRecord::from_entry(&entry);

        prop_assert!(record.tags.len() <= MAX_TAGS);
        prop_assert_eq!(record.tags.len(), tags.len().min(MAX_TAGS));
        prop_assert_eq!(&record.tags[..], &tags[..record.tags.len()]);
    }

    /// animeSeason がなければ spring / 2024
    #[test]
    fn prop_missing_season_defaults(title in "[A-Za-z ]{0,20}", episodes in 0i64..100) {
        let entry = SourceEntry {
            title: Some(title),
            episodes: Some(episodes),
            anime_season: None,
            ..Default::default()
        };
        let record = ImportRecord::from_entry(&entry);

        prop_assert_eq!(record.anime_season.season.as_str(), "spring");
        prop_assert_eq!(record.anime_season.year, 2024);
    }

    /// エピソード数は min(N, cap) で 1 から連番
    #[test]
    fn prop_episode_batch_is_contiguous(declared in -5i64..500, cap in 0u32..10) {
        let batch = EpisodeBatch::placeholders(declared, cap);
        let expected = declared.max(0).min(i64::from(cap)) as usize;

        prop_assert_eq!(batch.len(), expected);
        for (index, episode) in batch.episodes.iter().enumerate() {
            prop_assert_eq!(episode.episode_number as usize, index + 1);
            prop_assert_eq!(&episode.title, &format!("Episode {}", index + 1));
        }
    }
}
