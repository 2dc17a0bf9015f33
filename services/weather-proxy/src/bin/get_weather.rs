/// 天気プロキシHTTP Lambdaエントリポイント
///
/// API Gateway経由のHTTPリクエストを受け取り、WeatherAPI.comへ
/// 中継した結果をJSONレスポンスとして返却する。
use lambda_http::{Body, Error, Request, Response, run, service_fn};
use tracing::info;
use weather_proxy::application::WeatherProxyHandler;
use weather_proxy::infrastructure::init_logging;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("天気プロキシLambda関数を初期化");

    // Lambda関数を実行
    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// 認証情報は呼び出しごとに環境から解決する。認証情報が欠落していても
/// ここでは失敗させず、パラメータ検証を通過したリクエストにのみ
/// 設定エラーを返す。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let proxy = WeatherProxyHandler::from_env();

    Ok(proxy.handle(&request).await)
}
