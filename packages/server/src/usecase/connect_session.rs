//! UseCase: セッション接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectSessionUseCase::execute() メソッド
//! - セッションの生成・Active 遷移・registry への登録
//!
//! ### なぜこのテストが必要か
//! - 登録されたセッションが lookup で見えることを保証
//! - 容量超過時にセッションが Closed になり登録されないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系: 新規セッションの接続
//! - 正常系: 同一ユーザー名での複数接続
//! - 異常系: registry の容量超過

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use denrei_shared::time::epoch_millis;

use crate::domain::{
    ChatMessage, RegistryError, Session, SessionIdFactory, SessionRegistry, Timestamp, UserName,
};

use super::error::ConnectError;

/// セッション接続のユースケース
pub struct ConnectSessionUseCase {
    /// Registry（共有セッション表の抽象化）
    registry: Arc<dyn SessionRegistry>,
}

impl ConnectSessionUseCase {
    /// 新しい ConnectSessionUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// セッション接続を実行
    ///
    /// 新しい Session を生成して Active に遷移させ、registry に登録する。
    ///
    /// # Arguments
    ///
    /// * `user_name` - 認証済みユーザー名（Domain Model）
    /// * `sender` - セッションの送信チャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<Session>)` - 登録済みの Active なセッション
    /// * `Err(ConnectError)` - 接続失敗（セッションは Closed になる）
    pub async fn execute(
        &self,
        user_name: UserName,
        sender: UnboundedSender<ChatMessage>,
    ) -> Result<Arc<Session>, ConnectError> {
        let session = Arc::new(Session::new(
            SessionIdFactory::generate(),
            user_name,
            sender,
            Timestamp::new(epoch_millis()),
        ));
        session.activate();

        if let Err(RegistryError::CapacityExceeded { capacity, current }) =
            self.registry.register(session.clone()).await
        {
            tracing::warn!(
                "Registry full ({current}/{capacity}); refusing session {} for user '{}'",
                session.id(),
                session.user_name()
            );
            session.close();
            return Err(ConnectError::RegistryCapacityExceeded);
        }

        Ok(session)
    }
}
