// WeatherApiClient - 天気API用HTTPクライアント
//
// WeatherAPI.comのcurrent.jsonエンドポイントへ1回のGETリクエストを発行し、
// 結果を成功（JSONドキュメント）または失敗記述子に分類する。
// 再試行とタイムアウトは行わない（呼び出しの寿命はプラットフォーム側が制限する）。

use super::config::WeatherApiConfig;
use crate::domain::WeatherQuery;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};

/// WeatherApiClient用エラー型
///
/// Displayの文字列がそのままレスポンスボディのerrorフィールドになり、
/// `status_code`と`details`がレスポンスの残りを決める。
///
/// # エラー種別
/// - `UpstreamStatus`: 上流APIが200以外のステータスを返した
/// - `InvalidJson`: 200レスポンスのボディがJSONとして解析できない
/// - `Connection`: ネットワークレベルの接続失敗
#[derive(Debug, Error)]
pub enum WeatherApiError {
    /// 上流HTTPエラー（ステータスコード付き）
    #[error("Weather API returned status {status}")]
    UpstreamStatus {
        /// 上流のHTTPステータスコード
        status: u16,
        /// ステータスの理由句 (例: "Not Found")
        reason: String,
    },

    /// JSON解析エラー
    #[error("Failed to parse weather API response")]
    InvalidJson {
        /// パーサーのエラーメッセージ
        detail: String,
    },

    /// ネットワークエラー
    #[error("Failed to connect to weather API")]
    Connection {
        /// トランスポート層のエラーメッセージ
        detail: String,
    },
}

impl WeatherApiError {
    /// 呼び出し元へ返すHTTPステータスコード
    ///
    /// 上流HTTPエラーは上流のステータスをそのまま伝播し、
    /// それ以外は500を返す。
    pub fn status_code(&self) -> u16 {
        match self {
            Self::UpstreamStatus { status, .. } => *status,
            Self::InvalidJson { .. } | Self::Connection { .. } => 500,
        }
    }

    /// レスポンスボディのdetailsフィールドに入る文字列
    pub fn details(&self) -> String {
        match self {
            Self::UpstreamStatus { status, reason } => format!("HTTP {} - {}", status, reason),
            Self::InvalidJson { detail } | Self::Connection { detail } => detail.clone(),
        }
    }
}

/// WeatherApiClient - WeatherAPI.com現在天気クライアント
///
/// 検証済みクエリと設定から上流URLを組み立て、APIキーを
/// クエリパラメータとして注入する。パラメータのパーセント
/// エンコードはreqwestのクエリシリアライザが行う。
#[derive(Clone)]
pub struct WeatherApiClient {
    /// HTTPクライアント
    http: Client,
    /// 接続設定（APIキーとベースURL）
    config: WeatherApiConfig,
}

impl std::fmt::Debug for WeatherApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // APIキーをログに残さない
        f.debug_struct("WeatherApiClient")
            .field("base_url", &self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl WeatherApiClient {
    /// 設定からWeatherApiClientを作成
    pub fn new(config: WeatherApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// 現在天気を取得（GET /current.json）
    ///
    /// 呼び出しごとに1回だけ上流へリクエストを発行する。
    ///
    /// # 引数
    /// * `query` - 検証済みの天気取得クエリ
    ///
    /// # 戻り値
    /// * `Ok(Value)` - 上流の200レスポンスを解析したJSONドキュメント
    ///   （スキーマ検証やフィールドの取捨選択は行わず、そのまま返す）
    /// * `Err(WeatherApiError)` - 失敗記述子
    pub async fn fetch_current(&self, query: &WeatherQuery) -> Result<Value, WeatherApiError> {
        let url = self.config.current_url();
        debug!(url = %url, location = query.location(), lang = query.lang(), "天気APIへリクエスト送信");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query.location()),
                ("lang", query.lang()),
                ("key", self.config.api_key()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "天気APIへの接続に失敗");
                WeatherApiError::Connection {
                    detail: e.to_string(),
                }
            })?;

        let status = response.status();

        // 200以外は上流エラー。ボディは解析せず読み捨てる
        if status.as_u16() != 200 {
            let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
            let _ = response.bytes().await;

            warn!(status = status.as_u16(), reason = %reason, "天気APIがエラーステータスを返却");

            return Err(WeatherApiError::UpstreamStatus {
                status: status.as_u16(),
                reason,
            });
        }

        // ボディ読み取り中の失敗もトランスポートエラーとして扱う
        let body = response.text().await.map_err(|e| {
            error!(error = %e, "天気APIレスポンスボディの読み取りに失敗");
            WeatherApiError::Connection {
                detail: e.to_string(),
            }
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "天気APIレスポンスの解析に失敗");
            WeatherApiError::InvalidJson {
                detail: e.to_string(),
            }
        })
    }
}
