// src/components/position.rs

// serde を使う宣言！位置情報もスナップショットに載せて描画層に渡すからね！
use serde::{Serialize, Deserialize};

/// 2D空間での位置を表す構造体だよ！ (x, y) 座標を持つよ。📍
///
/// 山札の置き場所だったり、場札の列のアンカーだったり、
/// クリック判定に渡す点だったり、いろんな場面でこれを使うよ！汎用性高い！✨
///
/// 座標の型は `f32` (32ビット浮動小数点数) にしてみようかな？
/// 整数 (`i32`) でもいいけど、描画層がアニメーションとかで滑らかに動かしたい時に
/// 小数点以下も扱えると便利だからね！😉
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// 新しい Position を作るヘルパー関数。
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*; // 上で定義した Position を使う

    #[test]
    fn create_position() {
        let pos = Position::new(100.5, -50.0);

        // 値がちゃんと設定されてるか確認
        assert_eq!(pos.x, 100.5);
        assert_eq!(pos.y, -50.0);

        // 比較がちゃんとできるか確認
        let pos_same = Position::new(100.5, -50.0);
        let pos_different = Position::new(0.0, 0.0);
        assert_eq!(pos, pos_same);
        assert_ne!(pos, pos_different);

        println!("Position 作成テスト、成功！🎉");
    }
}
