use crate::constants::{POSITIONS_API, STATION_DATA_URL};

/// Fetch the station data file served next to the app.
///
/// # Errors
///
/// Returns an error if the request fails, the response status is not ok, or
/// the body cannot be read.
pub async fn fetch_station_data() -> Result<String, String> {
    fetch_text(STATION_DATA_URL).await
}

/// Fetch the newest position feed payload.
///
/// # Errors
///
/// Same conditions as [`fetch_station_data`]; the caller skips the polling
/// cycle and keeps the previous targets on screen.
pub async fn fetch_positions() -> Result<String, String> {
    fetch_text(POSITIONS_API).await
}

async fn fetch_text(url: &str) -> Result<String, String> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.status().is_success() {
        return Err(format!("HTTP error response code: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read body: {e}"))
}
