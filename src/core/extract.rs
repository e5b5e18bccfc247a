use crate::core::prompt::AD_SENTINEL;

/// 取出截斷標記之前的文字並去掉前後空白。沒有標記時使用整段輸出
pub fn extract_ad(raw_response: &str) -> String {
    let head = match raw_response.find(AD_SENTINEL) {
        Some(idx) => &raw_response[..idx],
        None => raw_response,
    };
    head.trim().to_string()
}
