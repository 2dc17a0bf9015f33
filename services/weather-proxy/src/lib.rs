// 天気プロキシLambda関数
//
// クライアントからの現在天気リクエストをWeatherAPI.comへ中継し、
// サーバー保持の認証情報を注入してエラーレスポンスを正規化する。

// Domain layer modules
pub mod domain;

// Application layer modules
pub mod application;

// Infrastructure layer modules
pub mod infrastructure;
