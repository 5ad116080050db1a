//! Break list filtering and grouping
//!
//! Pure functions applied to the in-memory break list every time the search
//! query or a filter changes. Search matches name or state case-insensitively;
//! the state and skill filters are exact matches with an empty string meaning
//! "all".

use std::collections::BTreeMap;

use crate::data::SurfBreak;

/// Active list filters. Empty fields are inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreakFilters {
    /// Case-insensitive substring matched against break name and state
    pub search: String,
    /// Exact state match
    pub state: String,
    /// Exact skill-level match
    pub skill: String,
}

impl BreakFilters {
    fn matches(&self, b: &SurfBreak) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            b.name.to_lowercase().contains(&needle) || b.state.to_lowercase().contains(&needle)
        };
        let matches_state = self.state.is_empty() || b.state == self.state;
        let matches_skill = self.skill.is_empty() || b.skill_level == self.skill;
        matches_search && matches_state && matches_skill
    }
}

/// Breaks passing all active filters, in their original order
pub fn filter_breaks<'a>(breaks: &'a [SurfBreak], filters: &BreakFilters) -> Vec<&'a SurfBreak> {
    breaks.iter().filter(|b| filters.matches(b)).collect()
}

/// Groups filtered breaks by state, with groups in alphabetical state order
/// and breaks keeping their original order within each group
pub fn group_by_state<'a>(breaks: &[&'a SurfBreak]) -> Vec<(String, Vec<&'a SurfBreak>)> {
    let mut groups: BTreeMap<String, Vec<&SurfBreak>> = BTreeMap::new();
    for b in breaks {
        groups.entry(b.state.clone()).or_default().push(b);
    }
    groups.into_iter().collect()
}

/// Distinct skill levels present in the data, in alphabetical order.
///
/// The skill filter cycles through these rather than a hardcoded list, so
/// whatever labels the backend uses show up as-is.
pub fn skill_levels(breaks: &[SurfBreak]) -> Vec<String> {
    let mut levels: Vec<String> = breaks
        .iter()
        .filter(|b| !b.skill_level.is_empty())
        .map(|b| b.skill_level.clone())
        .collect();
    levels.sort();
    levels.dedup();
    levels
}

/// Distinct states present in the data, in alphabetical order
pub fn states(breaks: &[SurfBreak]) -> Vec<String> {
    let mut states: Vec<String> = breaks
        .iter()
        .filter(|b| !b.state.is_empty())
        .map(|b| b.state.clone())
        .collect();
    states.sort();
    states.dedup();
    states
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surf_break(name: &str, state: &str, skill: &str) -> SurfBreak {
        SurfBreak {
            id: None,
            name: name.to_string(),
            state: state.to_string(),
            latitude: None,
            longitude: None,
            skill_level: skill.to_string(),
        }
    }

    fn sample_breaks() -> Vec<SurfBreak> {
        vec![
            surf_break("Bells Beach", "Victoria", "advanced"),
            surf_break("Snapper Rocks", "Queensland", "expert"),
            surf_break("Winkipop", "Victoria", "intermediate"),
            surf_break("Byron Bay", "New South Wales", "beginner"),
        ]
    }

    #[test]
    fn test_no_filters_passes_everything() {
        let breaks = sample_breaks();
        let filtered = filter_breaks(&breaks, &BreakFilters::default());
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let breaks = sample_breaks();
        let filters = BreakFilters {
            search: "bells".to_string(),
            ..Default::default()
        };
        let filtered = filter_breaks(&breaks, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Bells Beach");
    }

    #[test]
    fn test_search_also_matches_state() {
        let breaks = sample_breaks();
        let filters = BreakFilters {
            search: "queens".to_string(),
            ..Default::default()
        };
        let filtered = filter_breaks(&breaks, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Snapper Rocks");
    }

    #[test]
    fn test_state_filter_is_exact() {
        let breaks = sample_breaks();
        let filters = BreakFilters {
            state: "Victoria".to_string(),
            ..Default::default()
        };
        let filtered = filter_breaks(&breaks, &filters);
        assert_eq!(filtered.len(), 2);

        let filters = BreakFilters {
            state: "victoria".to_string(),
            ..Default::default()
        };
        assert!(filter_breaks(&breaks, &filters).is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let breaks = sample_breaks();
        let filters = BreakFilters {
            search: "w".to_string(),
            state: "Victoria".to_string(),
            skill: "intermediate".to_string(),
        };
        let filtered = filter_breaks(&breaks, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Winkipop");
    }

    #[test]
    fn test_skill_filter() {
        let breaks = sample_breaks();
        let filters = BreakFilters {
            skill: "beginner".to_string(),
            ..Default::default()
        };
        let filtered = filter_breaks(&breaks, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Byron Bay");
    }

    #[test]
    fn test_group_by_state_sorted_with_stable_order() {
        let breaks = sample_breaks();
        let filtered = filter_breaks(&breaks, &BreakFilters::default());
        let groups = group_by_state(&filtered);

        let names: Vec<&str> = groups.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(names, vec!["New South Wales", "Queensland", "Victoria"]);

        let victoria = &groups[2].1;
        assert_eq!(victoria[0].name, "Bells Beach");
        assert_eq!(victoria[1].name, "Winkipop");
    }

    #[test]
    fn test_skill_levels_are_distinct_and_sorted() {
        let mut breaks = sample_breaks();
        breaks.push(surf_break("Duplicate Skill", "Victoria", "advanced"));
        breaks.push(surf_break("No Skill", "Victoria", ""));
        assert_eq!(
            skill_levels(&breaks),
            vec!["advanced", "beginner", "expert", "intermediate"]
        );
    }

    #[test]
    fn test_states_are_distinct_and_sorted() {
        let breaks = sample_breaks();
        assert_eq!(
            states(&breaks),
            vec!["New South Wales", "Queensland", "Victoria"]
        );
    }

    #[test]
    fn test_empty_list() {
        let filtered = filter_breaks(&[], &BreakFilters::default());
        assert!(filtered.is_empty());
        assert!(group_by_state(&filtered).is_empty());
        assert!(skill_levels(&[]).is_empty());
    }
}
