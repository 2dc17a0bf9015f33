// 天気API接続設定
//
// WeatherAPI.comへの接続に必要なAPIキーとベースURLを管理する。

use thiserror::Error;

/// 天気APIのデフォルトベースURL
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// 天気API設定エラー
#[derive(Debug, Error)]
pub enum WeatherApiConfigError {
    /// 必須の環境変数が設定されていない（未設定または空）
    #[error("必須の環境変数が設定されていません: {0}")]
    MissingEnvVar(String),
}

/// 天気API接続設定
///
/// # フィールド
/// - `api_key`: WeatherAPI.comのAPIキー（認証情報、必須、非空）
/// - `base_url`: 天気APIのベースURL (例: "https://api.weatherapi.com/v1")
#[derive(Debug, Clone)]
pub struct WeatherApiConfig {
    api_key: String,
    base_url: String,
}

impl WeatherApiConfig {
    /// 明示的な値で新しい設定を作成（テスト用の注入にも使用）
    ///
    /// # 引数
    /// - `api_key`: WeatherAPI.comのAPIキー
    /// - `base_url`: 天気APIのベースURL
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - `WEATHER_API_KEY`: APIキー（必須、空文字列は未設定として扱う）
    /// - `WEATHER_API_BASE_URL`: ベースURL（省略時はデフォルト値）
    ///
    /// # 戻り値
    /// - `Ok(WeatherApiConfig)`: 設定が正常に読み込まれた
    /// - `Err(WeatherApiConfigError)`: APIキーが設定されていない
    pub fn from_env() -> Result<Self, WeatherApiConfigError> {
        let api_key = std::env::var("WEATHER_API_KEY")
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| WeatherApiConfigError::MissingEnvVar("WEATHER_API_KEY".to_string()))?;

        let base_url = std::env::var("WEATHER_API_BASE_URL")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }

    /// APIキーを取得
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// ベースURLを取得
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 現在天気エンドポイントURLを構築
    ///
    /// # 戻り値
    /// 現在天気エンドポイントの完全なURL
    /// (例: "https://api.weatherapi.com/v1/current.json")
    pub fn current_url(&self) -> String {
        format!("{}/current.json", self.base_url.trim_end_matches('/'))
    }
}
