use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use std::path::Path;

use crate::config::AppConfig;
use crate::database::{self, DbPool};
use crate::domain::{FRAMES_PER_MATCH, Match, Roster, Side, generate_matches};
use crate::errors::EditError;
use crate::standings::{self, ScoringRules, Standing};
use crate::transfer;

/// Owns the match list and keeps the stored snapshot in step with it.
///
/// Every mutation builds a new list, saves it, and only then replaces the
/// current one, so a failed save leaves the tournament untouched.
pub struct TournamentService {
    roster: Roster,
    rules: ScoringRules,
    matches: Vec<Match>,
    pool: DbPool,
    snapshot_key: String,
}

impl TournamentService {
    /// Restore the saved tournament, or start a fresh one
    pub fn open(config: &AppConfig, pool: DbPool) -> Result<Self> {
        let roster = config.tournament.roster()?;
        let snapshot_key = config.storage.snapshot_key.to_string();

        let mut conn = database::get_connection(&pool)?;
        database::setup::ensure_schema(&mut conn)?;
        let restored = Self::restore_snapshot(&mut conn, &snapshot_key, &roster)?;
        drop(conn);

        let mut service = Self {
            matches: Vec::new(),
            rules: ScoringRules::from(&config.tournament),
            roster,
            pool,
            snapshot_key,
        };

        match restored {
            Some(matches) => service.matches = matches,
            None => {
                info!("Starting a new tournament for {} players", service.roster.len());
                service.commit(generate_matches(&service.roster))?;
            }
        }

        Ok(service)
    }

    fn restore_snapshot(
        conn: &mut database::DbConn,
        key: &str,
        roster: &Roster,
    ) -> Result<Option<Vec<Match>>> {
        let Some(row) = database::snapshots::load_snapshot(conn, key)? else {
            debug!("No saved snapshot under {}", key);
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Match>>(&row.payload) {
            Ok(matches) => {
                if let Err(e) = transfer::validate_match_list(&matches, roster) {
                    warn!("Saved tournament does not match the current roster: {}", e);
                }
                info!("Restored {} matches saved at {}", matches.len(), row.saved_at);
                Ok(Some(matches))
            }
            Err(e) => {
                warn!("Discarding unreadable snapshot {}: {}", key, e);
                Ok(None)
            }
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn standings(&self) -> Vec<Standing> {
        standings::calculator::calculate_standings_with(&self.roster, &self.matches, self.rules)
    }

    pub fn apply_score_edit(
        &mut self,
        match_index: usize,
        frame_index: usize,
        side: Side,
        score: Option<u32>,
    ) -> Result<()> {
        self.check_match_index(match_index)?;
        if frame_index >= FRAMES_PER_MATCH {
            return Err(EditError::FrameOutOfRange {
                index: frame_index,
                count: FRAMES_PER_MATCH,
            }
            .into());
        }

        let mut matches = self.matches.clone();
        matches[match_index].frames[frame_index].set_score(side, score);
        self.commit(matches)?;

        debug!(
            "Match {} frame {}: {:?} score set to {:?}",
            match_index, frame_index, side, score
        );
        Ok(())
    }

    pub fn apply_high_break_edit(
        &mut self,
        match_index: usize,
        high_break: Option<u32>,
        player: Option<String>,
    ) -> Result<()> {
        self.check_match_index(match_index)?;

        let player = player.filter(|p| !p.trim().is_empty());
        let current = &self.matches[match_index];
        if let Some(name) = player.as_deref() {
            if !current.involves(name) {
                return Err(EditError::NotAParticipant {
                    player: name.to_string(),
                    player1: current.player1.clone(),
                    player2: current.player2.clone(),
                }
                .into());
            }
        }

        let mut matches = self.matches.clone();
        matches[match_index].high_break = high_break;
        matches[match_index].high_break_player = player;
        self.commit(matches)?;

        debug!("Match {}: high break set to {:?}", match_index, high_break);
        Ok(())
    }

    /// Discard every score and start over with empty matches
    pub fn reset(&mut self) -> Result<()> {
        self.commit(generate_matches(&self.roster))?;
        info!("Tournament reset: {} empty matches", self.matches.len());
        Ok(())
    }

    /// Replace the whole list with validated JSON text; returns the match count
    pub fn import_list(&mut self, text: &str) -> Result<usize> {
        let matches = transfer::parse_match_list(text, &self.roster)?;
        let count = matches.len();
        self.commit(matches)?;

        info!("Imported {} matches", count);
        Ok(count)
    }

    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let matches = transfer::import_from_file(path, &self.roster)?;
        let count = matches.len();
        self.commit(matches)?;

        info!("Imported {} matches", count);
        Ok(count)
    }

    pub fn export_json(&self) -> Result<String> {
        transfer::to_pretty_json(&self.matches)
    }

    pub fn export_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        transfer::export_to_file(path, &self.matches)
    }

    fn check_match_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.matches.len() {
            Ok(())
        } else {
            Err(EditError::MatchOutOfRange {
                index,
                count: self.matches.len(),
            })
        }
    }

    fn commit(&mut self, matches: Vec<Match>) -> Result<()> {
        self.persist(&matches)?;
        self.matches = matches;
        Ok(())
    }

    fn persist(&self, matches: &[Match]) -> Result<()> {
        let payload =
            serde_json::to_string(matches).context("Failed to serialize match list")?;
        let mut conn = database::get_connection(&self.pool)?;
        database::snapshots::save_snapshot(
            &mut conn,
            &self.snapshot_key,
            &payload,
            Utc::now().naive_utc(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_memory_pool;
    use crate::errors::ImportError;

    fn config() -> AppConfig {
        AppConfig::new().with_players(Some(
            ["Matt", "Ian", "Tom", "Peter"].map(String::from).to_vec(),
        ))
    }

    fn open_fresh() -> (TournamentService, DbPool) {
        let pool = create_memory_pool().unwrap();
        let service = TournamentService::open(&config(), pool.clone()).unwrap();
        (service, pool)
    }

    fn stored_payload(pool: &DbPool) -> String {
        let mut conn = database::get_connection(pool).unwrap();
        database::snapshots::load_snapshot(&mut conn, "snookerMatches")
            .unwrap()
            .unwrap()
            .payload
    }

    #[test]
    fn test_open_without_snapshot_generates_and_saves() {
        let (service, pool) = open_fresh();
        assert_eq!(service.matches().len(), 6);

        let saved: Vec<Match> = serde_json::from_str(&stored_payload(&pool)).unwrap();
        assert_eq!(saved, service.matches());
    }

    #[test]
    fn test_edits_survive_reopen() {
        let (mut service, pool) = open_fresh();
        service.apply_score_edit(0, 1, Side::Player2, Some(64)).unwrap();
        service
            .apply_high_break_edit(0, Some(35), Some("Ian".to_string()))
            .unwrap();
        drop(service);

        let reopened = TournamentService::open(&config(), pool).unwrap();
        let m = &reopened.matches()[0];
        assert_eq!(m.frames[1].player2_score, Some(64));
        assert_eq!(m.high_break, Some(35));
        assert_eq!(m.high_break_player.as_deref(), Some("Ian"));
    }

    #[test]
    fn test_score_edit_changes_exactly_one_frame() {
        let (mut service, _pool) = open_fresh();
        let before = service.matches().to_vec();
        service.apply_score_edit(2, 0, Side::Player1, Some(12)).unwrap();

        for (idx, (old, new)) in before.iter().zip(service.matches()).enumerate() {
            if idx == 2 {
                assert_eq!(new.frames[0].player1_score, Some(12));
                assert_eq!(new.frames[1..], old.frames[1..]);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_out_of_range_edits_are_rejected() {
        let (mut service, _pool) = open_fresh();
        let err = service
            .apply_score_edit(6, 0, Side::Player1, Some(1))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<EditError>(),
            Some(&EditError::MatchOutOfRange { index: 6, count: 6 })
        );

        let err = service
            .apply_score_edit(0, 3, Side::Player1, Some(1))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EditError>(),
            Some(EditError::FrameOutOfRange { index: 3, .. })
        ));
    }

    #[test]
    fn test_high_break_must_belong_to_a_participant() {
        let (mut service, _pool) = open_fresh();
        let err = service
            .apply_high_break_edit(0, Some(50), Some("Tom".to_string()))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EditError>(),
            Some(EditError::NotAParticipant { .. })
        ));
        assert_eq!(service.matches()[0].high_break, None);

        service
            .apply_high_break_edit(0, Some(50), Some(String::new()))
            .unwrap();
        assert_eq!(service.matches()[0].high_break_player, None);
    }

    #[test]
    fn test_reset_matches_fresh_generation() {
        let (mut service, pool) = open_fresh();
        service.apply_score_edit(1, 2, Side::Player1, Some(80)).unwrap();
        service
            .apply_high_break_edit(3, Some(20), Some("Tom".to_string()))
            .unwrap();

        service.reset().unwrap();

        let fresh = generate_matches(service.roster());
        assert_eq!(service.matches(), fresh);
        let saved: Vec<Match> = serde_json::from_str(&stored_payload(&pool)).unwrap();
        assert_eq!(saved, fresh);
    }

    #[test]
    fn test_failed_import_leaves_state_untouched() {
        let (mut service, pool) = open_fresh();
        service.apply_score_edit(0, 0, Side::Player1, Some(9)).unwrap();
        let before = service.matches().to_vec();
        let saved_before = stored_payload(&pool);

        let err = service.import_list("[{\"broken\": true").unwrap_err();
        assert!(err.downcast_ref::<ImportError>().is_some());
        assert_eq!(service.matches(), before);
        assert_eq!(stored_payload(&pool), saved_before);
    }

    fn drop_snapshot_table(pool: &DbPool) {
        let conn = database::get_connection(pool).unwrap();
        conn.execute("DROP TABLE snapshots", []).unwrap();
    }

    #[test]
    fn test_failed_save_keeps_previous_scores() {
        let (mut service, pool) = open_fresh();
        service.apply_score_edit(0, 0, Side::Player1, Some(9)).unwrap();
        let before = service.matches().to_vec();
        drop_snapshot_table(&pool);

        assert!(service.apply_score_edit(0, 0, Side::Player1, Some(5)).is_err());
        assert!(
            service
                .apply_high_break_edit(0, Some(40), Some("Matt".to_string()))
                .is_err()
        );
        assert_eq!(service.matches(), before);
    }

    #[test]
    fn test_failed_save_keeps_scores_through_reset() {
        let (mut service, pool) = open_fresh();
        service.apply_score_edit(1, 2, Side::Player2, Some(77)).unwrap();
        let before = service.matches().to_vec();
        drop_snapshot_table(&pool);

        assert!(service.reset().is_err());
        assert_eq!(service.matches(), before);
        assert_eq!(service.matches()[1].frames[2].player2_score, Some(77));
    }

    #[test]
    fn test_duplicate_roster_names_are_refused() {
        let pool = create_memory_pool().unwrap();
        let repeated = AppConfig::new().with_players(Some(
            ["Matt", "Ian", "Matt"].map(String::from).to_vec(),
        ));
        assert!(TournamentService::open(&repeated, pool).is_err());
    }

    #[test]
    fn test_import_file_replaces_list() {
        let (mut service, _pool) = open_fresh();
        service.apply_score_edit(3, 0, Side::Player1, Some(51)).unwrap();
        let path = std::env::temp_dir().join(format!(
            "snooker_service_import_{}.json",
            std::process::id()
        ));
        service.export_file(&path).unwrap();
        let before = service.matches().to_vec();

        service.reset().unwrap();
        let count = service.import_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(count, 6);
        assert_eq!(service.matches(), before);
    }

    #[test]
    fn test_export_import_round_trip() {
        let (mut service, _pool) = open_fresh();
        service.apply_score_edit(4, 1, Side::Player2, Some(33)).unwrap();
        service
            .apply_high_break_edit(5, Some(27), Some("Peter".to_string()))
            .unwrap();
        let exported = service.export_json().unwrap();
        let before = service.matches().to_vec();

        service.reset().unwrap();
        assert_eq!(service.import_list(&exported).unwrap(), 6);
        assert_eq!(service.matches(), before);
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_fresh_list() {
        let pool = create_memory_pool().unwrap();
        {
            let mut conn = database::get_connection(&pool).unwrap();
            database::setup::ensure_schema(&mut conn).unwrap();
            database::snapshots::save_snapshot(
                &mut conn,
                "snookerMatches",
                "definitely not json",
                Utc::now().naive_utc(),
            )
            .unwrap();
        }

        let service = TournamentService::open(&config(), pool.clone()).unwrap();
        assert_eq!(service.matches(), generate_matches(service.roster()));
        let saved: Vec<Match> = serde_json::from_str(&stored_payload(&pool)).unwrap();
        assert_eq!(saved.len(), 6);
    }

    #[test]
    fn test_snapshot_is_used_verbatim_even_for_other_roster() {
        let pool = create_memory_pool().unwrap();
        let other = AppConfig::new().with_players(Some(vec!["Ronnie".into(), "Judd".into()]));
        let mut first = TournamentService::open(&other, pool.clone()).unwrap();
        first.apply_score_edit(0, 0, Side::Player1, Some(100)).unwrap();
        drop(first);

        let service = TournamentService::open(&config(), pool).unwrap();
        assert_eq!(service.matches().len(), 1);
        assert_eq!(service.matches()[0].player1, "Ronnie");
        assert!(service.standings().iter().all(|s| s.total == 0));
    }
}
