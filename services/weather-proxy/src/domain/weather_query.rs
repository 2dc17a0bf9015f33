// 天気取得クエリ
//
// 受信リクエストのクエリ文字列から地名と言語タグを検証・抽出する。

use thiserror::Error;

/// 言語タグのデフォルト値
pub const DEFAULT_LANG: &str = "en-US";

/// クエリパラメータ検証エラー
///
/// Displayの文字列がそのままレスポンスボディのerrorフィールドになる。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// 必須パラメータqが欠落または空
    #[error("Missing required parameter: q (location)")]
    MissingLocation,
}

/// 検証済みの天気取得クエリ
///
/// # フィールド
/// - `location`: 取得対象の地名（必須、非空）
/// - `lang`: 言語タグ（省略時は`en-US`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    location: String,
    lang: String,
}

impl WeatherQuery {
    /// クエリパラメータから検証済みクエリを作成
    ///
    /// # 引数
    /// - `q`: 地名パラメータ（必須）
    /// - `lang`: 言語タグパラメータ（省略可）
    ///
    /// # 戻り値
    /// - `Ok(WeatherQuery)`: 検証に成功
    /// - `Err(QueryError::MissingLocation)`: qが欠落または空
    ///
    /// # 注意
    /// 空文字列のlangもデフォルト値に置き換える。
    pub fn new(q: Option<&str>, lang: Option<&str>) -> Result<Self, QueryError> {
        let location = match q {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => return Err(QueryError::MissingLocation),
        };

        let lang = match lang {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => DEFAULT_LANG.to_string(),
        };

        Ok(Self { location, lang })
    }

    /// 地名を取得
    pub fn location(&self) -> &str {
        &self.location
    }

    /// 言語タグを取得
    pub fn lang(&self) -> &str {
        &self.lang
    }
}
