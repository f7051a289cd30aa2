use tabletally::{Rank, RankedStanding, Standing, rank_standings};

fn standings(rows: &[(i64, i64)]) -> Vec<Standing> {
    rows.iter()
        .enumerate()
        .map(|(player, &(score, tie_break))| Standing {
            player,
            score,
            tie_break,
            subtitle: None,
        })
        .collect()
}

fn ranks(ranked: &[RankedStanding]) -> Vec<String> {
    ranked.iter().map(|entry| entry.rank.to_string()).collect()
}

#[test]
fn shared_pair_ties_and_lower_score_skips_ahead() {
    let ranked = rank_standings(&standings(&[(30, 5), (30, 5), (20, 8)]));
    // Reveal order: lowest rank first, winners last.
    assert_eq!(ranks(&ranked), ["3", "T1", "T1"]);
    assert_eq!(ranked[0].player, 2);
    assert_eq!(ranked[0].score, 20);
    assert_eq!(ranked[0].tie_break, None);
    assert_eq!(ranked[1].tie_break, Some(5));
    assert_eq!(ranked[2].tie_break, Some(5));
}

#[test]
fn single_player_ranks_first_without_tie_break() {
    let ranked = rank_standings(&standings(&[(42, 3)]));
    assert_eq!(ranked.len(), 1);
    assert_eq!(
        ranked[0].rank,
        Rank {
            position: 1,
            tied: false
        }
    );
    assert_eq!(ranked[0].tie_break, None);
}

#[test]
fn tie_break_decides_but_is_still_revealed() {
    let ranked = rank_standings(&standings(&[(50, 2), (50, 7), (10, 0)]));
    assert_eq!(ranks(&ranked), ["3", "2", "1"]);
    assert_eq!(ranked[2].player, 1);
    assert_eq!(ranked[2].tie_break, Some(7));
    assert_eq!(ranked[1].player, 0);
    assert_eq!(ranked[1].tie_break, Some(2));
    assert_eq!(ranked[0].tie_break, None);
}

#[test]
fn three_way_tie_uses_competition_ranking() {
    let ranked = rank_standings(&standings(&[(12, 1), (40, 0), (12, 1), (12, 1), (5, 0)]));
    let mut winner_first = ranks(&ranked);
    winner_first.reverse();
    assert_eq!(winner_first, ["1", "T2", "T2", "T2", "5"]);
}

#[test]
fn tie_inside_a_score_group_split_by_tie_break() {
    // Same score for all; two share the best tie-break.
    let ranked = rank_standings(&standings(&[(20, 3), (20, 9), (20, 9), (20, 1)]));
    let mut winner_first = ranks(&ranked);
    winner_first.reverse();
    assert_eq!(winner_first, ["T1", "T1", "3", "4"]);
    assert!(ranked.iter().all(|entry| entry.tie_break.is_some()));
}

#[test]
fn everyone_tied() {
    let ranked = rank_standings(&standings(&[(0, 0), (0, 0), (0, 0)]));
    assert_eq!(ranks(&ranked), ["T1", "T1", "T1"]);
}

#[test]
fn equal_pairs_keep_input_order() {
    let ranked = rank_standings(&standings(&[(9, 1), (9, 1)]));
    let winner_first: Vec<_> = ranked.iter().rev().map(|entry| entry.player).collect();
    assert_eq!(winner_first, [0, 1]);
}

#[test]
fn ranking_is_deterministic() {
    let input = standings(&[(7, 2), (7, 2), (3, 3), (11, 0), (3, 1)]);
    assert_eq!(rank_standings(&input), rank_standings(&input));
}

#[test]
fn subtitles_follow_their_player() {
    let mut input = standings(&[(1, 0), (2, 0)]);
    input[0].subtitle = Some("Gizah".to_string());
    let ranked = rank_standings(&input);
    assert_eq!(ranked[0].subtitle.as_deref(), Some("Gizah"));
    assert_eq!(ranked[1].subtitle, None);
}
