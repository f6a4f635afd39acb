//! UseCase: メッセージ配送処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RouteMessageUseCase::execute() メソッド
//! - 宛先ユーザーの全セッションへのファンアウト配送
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証: 宛先の全セッションに 1 通ずつ届く
//! - 一部セッションへの送信失敗が他セッションへの配送を妨げないことを保証
//! - 送信に失敗したセッションが registry から自己修復的に削除されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系: 単一/複数セッションへの配送
//! - 正常系: 宛先オフライン（配送数 0、エラーではない）
//! - 異常系: 宛先が空のメッセージ
//! - エッジケース: 配送中に切断されたセッション

use std::sync::Arc;

use crate::domain::{ChatMessage, SessionRegistry};

use super::error::RouteError;

/// メッセージ配送のユースケース
///
/// 1 通のメッセージを宛先ユーザーの全セッションに配送する。
pub struct RouteMessageUseCase {
    /// Registry（共有セッション表の抽象化）
    registry: Arc<dyn SessionRegistry>,
}

impl RouteMessageUseCase {
    /// 新しい RouteMessageUseCase を作成
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// メッセージ配送を実行
    ///
    /// # Arguments
    ///
    /// * `message` - 配送するメッセージ
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 配送に成功したセッション数（宛先オフラインなら 0）
    /// * `Err(RouteError)` - 宛先が空のメッセージ（送信は一切行われない）
    pub async fn execute(&self, message: ChatMessage) -> Result<usize, RouteError> {
        if message.receiver.is_empty() {
            return Err(RouteError::EmptyReceiver);
        }

        let sessions = self.registry.lookup(&message.receiver).await;
        if sessions.is_empty() {
            // Receiver offline is a normal outcome, not an error
            tracing::debug!(
                "No live session for receiver '{}'; message from '{}' dropped",
                message.receiver,
                message.sender
            );
            return Ok(0);
        }

        let attempted = sessions.len();
        let mut delivered = 0;
        for session in sessions {
            match session.send(message.clone()) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    // A dead session must not block its siblings; drop it
                    // from the registry and keep going.
                    tracing::warn!(
                        "Failed to deliver to session {} of user '{}': {}",
                        session.id(),
                        session.user_name(),
                        e
                    );
                    session.close();
                    self.registry.unregister(&session).await;
                }
            }
        }

        tracing::debug!(
            "Delivered message from '{}' to {}/{} session(s) of '{}'",
            message.sender,
            delivered,
            attempted,
            message.receiver
        );

        Ok(delivered)
    }
}
