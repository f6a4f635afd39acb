//! UseCase: セッション切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectSessionUseCase::execute() メソッド
//! - セッションの Closed 遷移と registry からの削除
//!
//! ### なぜこのテストが必要か
//! - 切断後のセッションが lookup に現れないことを保証
//! - 切断とルーティングの競合時にも安全に no-op になることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系: 接続中セッションの切断
//! - エッジケース: 同じセッションの二重切断

use std::sync::Arc;

use crate::domain::{Session, SessionRegistry};

/// セッション切断のユースケース
pub struct DisconnectSessionUseCase {
    /// Registry（共有セッション表の抽象化）
    registry: Arc<dyn SessionRegistry>,
}

impl DisconnectSessionUseCase {
    /// 新しい DisconnectSessionUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// セッション切断を実行
    ///
    /// セッションを Closed に遷移させ、registry から削除する。
    /// すでに削除済みでも失敗しない（切断はルーティング中の送信失敗による
    /// 自己修復と競合しうる）。
    pub async fn execute(&self, session: &Session) {
        session.close();
        self.registry.unregister(session).await;
    }
}
