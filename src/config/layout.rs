// src/config/layout.rs
//! 盤面レイアウトに関する定数を定義するよ！
//! カードの大きさ、各パイルのアンカー座標、重なりのオフセットなど。
//! クリック判定 (hit_test) とスナップショットの座標はぜんぶここの値から決まる。
//! 座標系は左上が原点で、y は下向きに増えるよ (描画層と同じ向き！)。

pub const CARD_WIDTH: f32 = 73.0; // カードの幅
pub const CARD_HEIGHT: f32 = 97.0; // カードの高さ

/// 場札で下のカードがどれだけ見えるか (縦のずらし幅)。
/// 表向きカードのクリック判定バンドもこの高さになるよ。
pub const TABLEAU_FAN_OFFSET: f32 = 22.0;
/// 捨て札の一番上のカードを山札からどれだけ横にずらして置くか。
pub const WASTE_FAN_OFFSET: f32 = 26.0;

// --- 各エリアのアンカー位置 ---
pub const STOCK_POS_X: f32 = 20.0; // 山札のX座標
pub const STOCK_POS_Y: f32 = 20.0; // 山札のY座標

pub const WASTE_POS_X: f32 = STOCK_POS_X + CARD_WIDTH + WASTE_FAN_OFFSET; // 捨て札は山札のすぐ右！
pub const WASTE_POS_Y: f32 = STOCK_POS_Y;

pub const FOUNDATION_START_X: f32 = 320.0; // 組札 (Foundation) の開始X座標
pub const FOUNDATION_START_Y: f32 = 20.0; // 組札のY座標
pub const FOUNDATION_X_OFFSET: f32 = 100.0; // 組札間のX方向の間隔

pub const TABLEAU_START_X: f32 = 20.0; // 場札 (Tableau) の開始X座標
pub const TABLEAU_START_Y: f32 = 140.0; // 場札の開始Y座標
pub const TABLEAU_X_OFFSET: f32 = 100.0; // 場札の列間のX方向の間隔
