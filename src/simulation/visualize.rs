use crate::game::board::Spot;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Visit count of one spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpotVisits {
    pub spot: Spot,
    pub visits: usize,
}

/// Spots that were visited at least once, ordered by visit count.
///
/// Spots with equal counts are ordered by spot index ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitRanking {
    entries: Vec<SpotVisits>,
}

/// Output of [`crate::Simulation::visualize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visualization {
    /// Every visit of every game, duplicates kept.
    Flat(Vec<Spot>),
    Ranked(VisitRanking),
}

pub fn flatten(games: &[Vec<Spot>]) -> Vec<Spot> {
    games.iter().flatten().copied().collect()
}

pub fn count_visits<'a, I>(visits: I) -> BTreeMap<Spot, usize>
where
    I: IntoIterator<Item = &'a Spot>,
{
    let mut counts = BTreeMap::new();
    for &spot in visits {
        *counts.entry(spot).or_insert(0) += 1;
    }
    counts
}

impl VisitRanking {
    /// `descending` puts the most visited spot first.
    pub fn from_games(games: &[Vec<Spot>], descending: bool) -> VisitRanking {
        let counts = count_visits(games.iter().flatten());
        let mut entries: Vec<SpotVisits> = counts
            .into_iter()
            .map(|(spot, visits)| SpotVisits { spot, visits })
            .collect();

        // Stable sort over spot-ordered entries keeps ties by spot ascending
        if descending {
            entries.sort_by(|a, b| b.visits.cmp(&a.visits));
        } else {
            entries.sort_by_key(|e| e.visits);
        }
        VisitRanking { entries }
    }

    pub fn entries(&self) -> &[SpotVisits] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpotVisits> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, spot: Spot) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.spot == spot)
            .map(|e| e.visits)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.visits).sum()
    }

    /// Fraction of all visits that landed on `spot`.
    pub fn share(&self, spot: Spot) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(spot).unwrap_or(0) as f64 / total as f64
    }

    /// Writes one `spot=<position> visits=<count>` line per entry.
    pub fn write_lines<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for entry in &self.entries {
            writeln!(writer, "spot={} visits={}", entry.spot, entry.visits)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_games() -> Vec<Vec<Spot>> {
        vec![vec![4, 10, 10, 17], vec![10, 4, 22, 39], vec![39, 5, 10, 4]]
    }

    #[test]
    fn test_flatten_keeps_duplicates() {
        let flat = flatten(&sample_games());
        assert_eq!(flat.len(), 12);
        assert_eq!(flat.iter().filter(|&&s| s == 10).count(), 4);
    }

    #[test]
    fn test_ranking_descending_with_ties_by_spot() {
        let ranking = VisitRanking::from_games(&sample_games(), true);
        let order: Vec<(Spot, usize)> = ranking.iter().map(|e| (e.spot, e.visits)).collect();
        assert_eq!(
            order,
            vec![(10, 4), (4, 3), (39, 2), (5, 1), (17, 1), (22, 1)]
        );
        assert_eq!(ranking.total(), 12);
    }

    #[test]
    fn test_ranking_ascending() {
        let ranking = VisitRanking::from_games(&sample_games(), false);
        let spots: Vec<Spot> = ranking.iter().map(|e| e.spot).collect();
        assert_eq!(spots, vec![5, 17, 22, 39, 4, 10]);
    }

    #[test]
    fn test_unvisited_spots_are_absent() {
        let ranking = VisitRanking::from_games(&sample_games(), true);
        assert_eq!(ranking.len(), 6);
        assert_eq!(ranking.get(0), None);
        assert_eq!(ranking.share(0), 0.0);
        assert!((ranking.share(10) - 4.0 / 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_games() {
        let ranking = VisitRanking::from_games(&[], true);
        assert!(ranking.is_empty());
        assert_eq!(ranking.share(10), 0.0);
    }

    #[test]
    fn test_write_lines_format() {
        let ranking = VisitRanking::from_games(&[vec![7, 7, 3]], true);
        let mut out = Vec::new();
        ranking.write_lines(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "spot=7 visits=2\nspot=3 visits=1\n");
    }
}
