//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
use crate::components::pile::Pile;
use log::debug;

/// 持ち上げた束が、特定の組札 (Foundation) の一番上に置けるかチェックする。
///
/// 組札に置けるのは1枚だけ！束ごと置くのはダメ。
/// - 組札が空: その1枚がエースなら OK。
/// - 組札にカードあり: スートが一致していて、ランクがちょうど1つ上なら OK。
pub fn can_move_to_foundation(run: &[Card], foundation: &Pile) -> bool {
    let [card] = run else {
        debug!("[Foundation Rule] run of {} cards can never go to a foundation", run.len());
        return false;
    };

    match foundation.top_card() {
        None => {
            let is_ace = card.rank == Rank::Ace;
            debug!("[Foundation Rule] target empty, {} is ace: {}", card, is_ace);
            is_ace
        }
        Some(top) => {
            let suit_matches = card.suit == top.suit;
            let is_next_rank = (card.rank as usize) == (top.rank as usize) + 1;
            debug!(
                "[Foundation Rule] {} onto {}: suit match {}, next rank {}",
                card, top, suit_matches, is_next_rank
            );
            suit_matches && is_next_rank
        }
    }
}
