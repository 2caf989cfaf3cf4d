//! Адреса backend API.
//!
//! Backend слушает тот же хост, что отдал страницу, но на своём порту.

const BACKEND_PORT: u16 = 3000;

/// Полный URL для пути вида `/api/...`.
///
/// Без `window` возвращается сам путь.
pub fn api_url(path: &str) -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return path.to_string();
    };
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}{}", protocol, hostname, BACKEND_PORT, path)
}
