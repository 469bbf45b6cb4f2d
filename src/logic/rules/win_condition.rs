//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::pile::Pile;

/// ゲームのクリア条件（4つの組札が全部13枚揃ったか）を判定する。
pub fn check_win_condition(foundations: &[Pile]) -> bool {
    foundations.len() == 4 && foundations.iter().all(|pile| pile.len() == 13)
}
