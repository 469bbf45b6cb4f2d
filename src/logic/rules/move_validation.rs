// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use crate::components::card::Card;
use crate::components::pile::{Pile, PileKind};
use crate::logic::rules::{foundation, tableau}; // 各ルール関数を use
use log::debug;

/// 持ち上げた束を特定のパイルに置けるか検証する。
/// 移動先の種類に応じて、組札ルールか場札ルールに振り分けるだけ！
/// 山札・捨て札・移動中の束への直接移動は常に却下だよ。
pub fn is_move_valid(run: &[Card], destination: &Pile) -> bool {
    if run.is_empty() {
        debug!("[Rules Validation] empty run, nothing to validate");
        return false;
    }

    // 移動先パイルの種類に応じてルールチェック
    match destination.kind {
        PileKind::Tableau(_) => {
            // 場札への移動ルールをチェック
            tableau::can_move_to_tableau(run, destination)
        }
        PileKind::Foundation(_) => {
            // 組札への移動ルールをチェック
            foundation::can_move_to_foundation(run, destination)
        }
        PileKind::Stock | PileKind::Waste | PileKind::TransientRun => {
            debug!("[Rules Validation] moving to {:?} is not allowed", destination.kind);
            false
        }
    }
}
