// 天気プロキシハンドラー
//
// クエリパラメータの検証、認証情報の解決、上流API呼び出し、
// レスポンス組み立てまでの直線的なパイプラインを実行する。
// すべての失敗経路を整形済みJSONレスポンスに変換し、境界の外へは何も投げない。

use crate::domain::WeatherQuery;
use crate::infrastructure::{WeatherApiClient, WeatherApiConfig, WeatherApiError};
use lambda_http::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, HeaderMap, HeaderValue,
};
use lambda_http::{Body, Request, RequestExt, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

/// エラーレスポンスのボディ
///
/// detailsがNoneの場合はフィールド自体を省略する
/// （パラメータ検証エラーと設定エラーにはdetailsを含めない）。
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

/// 天気プロキシハンドラー
///
/// 1回の呼び出しにつき1つのレスポンスを生成する。
/// 処理順序: 検証 → 認証情報解決 → 上流呼び出し → 結果分類 → シリアライズ。
pub struct WeatherProxyHandler {
    /// 上流APIクライアント（認証情報が未設定の場合はNone）
    client: Option<WeatherApiClient>,
}

impl WeatherProxyHandler {
    /// クライアントを注入して新しいハンドラーを作成（テストでの偽認証情報注入にも使用）
    pub fn new(client: WeatherApiClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// 認証情報なしのハンドラーを作成
    ///
    /// パラメータ検証は通常どおり行われ、検証を通過したリクエストには
    /// 設定エラー（500）を返す。
    pub fn without_credential() -> Self {
        Self { client: None }
    }

    /// 環境変数からハンドラーを作成
    ///
    /// 認証情報が未設定でもここでは失敗させない。検証エラーが
    /// 設定エラーより優先されるよう、報告はhandleまで遅延する。
    pub fn from_env() -> Self {
        match WeatherApiConfig::from_env() {
            Ok(config) => Self::new(WeatherApiClient::new(config)),
            Err(err) => {
                warn!(error = %err, "天気API設定の読み込みに失敗");
                Self::without_credential()
            }
        }
    }

    /// リクエストを処理してレスポンスを生成
    ///
    /// # 処理フロー
    /// 1. クエリパラメータ検証（qは必須、langは省略時en-US）
    /// 2. 認証情報の確認（欠落は500の設定エラー）
    /// 3. 上流APIを1回呼び出し、結果を分類
    ///
    /// # 戻り値
    /// 成功・失敗を問わずContent-TypeとCORSヘッダー付きのJSONレスポンス
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        let params = request.query_string_parameters();
        info!(
            q = params.first("q").unwrap_or(""),
            "天気プロキシリクエスト受信"
        );

        // 1. クエリパラメータ検証（設定エラーより優先）
        let query = match WeatherQuery::new(params.first("q"), params.first("lang")) {
            Ok(query) => query,
            Err(err) => {
                warn!(error = %err, "クエリパラメータ検証エラー");
                return Self::error_response(400, &err.to_string(), None);
            }
        };

        // 2. 認証情報の解決
        let Some(client) = &self.client else {
            error!("天気APIの認証情報が未設定のため設定エラーを返却");
            return Self::error_response(500, "Server configuration error", None);
        };

        // 3. 上流API呼び出しと結果分類
        match client.fetch_current(&query).await {
            Ok(document) => {
                info!(location = query.location(), "天気情報の取得に成功");
                Self::success_response(&document)
            }
            Err(err) => {
                error!(
                    status = err.status_code(),
                    details = %err.details(),
                    "上流API呼び出しに失敗"
                );
                Self::upstream_error_response(&err)
            }
        }
    }

    /// 上流JSONドキュメントをそのまま通す成功レスポンスを生成
    fn success_response(document: &Value) -> Response<Body> {
        let json =
            serde_json::to_string(document).expect("JSONドキュメントのシリアライズに失敗");
        Self::json_response(200, json)
    }

    /// 失敗記述子からエラーレスポンスを生成
    fn upstream_error_response(err: &WeatherApiError) -> Response<Body> {
        Self::error_response(err.status_code(), &err.to_string(), Some(&err.details()))
    }

    /// エラーレスポンスを生成
    ///
    /// ボディは `{"error": <message>}`、detailsがある場合は
    /// `{"error": <message>, "details": <details>}`。
    fn error_response(status: u16, message: &str, details: Option<&str>) -> Response<Body> {
        let body = ErrorBody {
            error: message,
            details,
        };
        let json = serde_json::to_string(&body).expect("エラーボディのシリアライズに失敗");
        Self::json_response(status, json)
    }

    /// ステータスコードとJSONボディからレスポンスを構築
    fn json_response(status: u16, json: String) -> Response<Body> {
        let mut response = Response::builder()
            .status(status)
            .body(Body::Text(json))
            .expect("レスポンスの構築に失敗");

        // ヘッダーを設定
        *response.headers_mut() = Self::response_headers();

        response
    }

    /// 全レスポンス共通のヘッダーを生成
    ///
    /// 成功・失敗を問わず以下を含むHeaderMapを返す:
    /// - Content-Type: application/json
    /// - Access-Control-Allow-Origin: *
    pub fn response_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));

        headers
    }
}
