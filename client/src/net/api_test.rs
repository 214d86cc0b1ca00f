use super::*;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(cattle_endpoint("u1"), "/gaupal/cattle/u1");
    assert_eq!(cattle_item_endpoint("c9"), "/gaupal/cattle/item/c9");
    assert_eq!(vaccinations_endpoint("c9"), "/gaupal/cattle/item/c9/vaccinations");
    assert_eq!(metrics_endpoint("u1"), "/gaupal/cattle/u1/metrics");
    assert_eq!(article_endpoint("a1"), "/gaupal/article/a1");
    assert_eq!(product_endpoint("p1"), "/gaupal/products/p1");
}

#[test]
fn recommend_endpoint_encodes_breed() {
    assert_eq!(recommend_endpoint("Gir"), "/recommend?breed=Gir");
    assert_eq!(recommend_endpoint("Red Sindhi&x"), "/recommend?breed=Red%20Sindhi%26x");
}

#[test]
fn encode_component_escapes_utf8_bytes() {
    assert_eq!(encode_component("गिर"), "%E0%A4%97%E0%A4%BF%E0%A4%B0");
    assert_eq!(encode_component("a-b_c.d~"), "a-b_c.d~");
}

#[test]
fn bearer_formats_header() {
    assert_eq!(bearer("tok"), "Bearer tok");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(500), "request failed: 500");
}

#[test]
fn api_error_from_body_reads_message() {
    let err = ApiError::from_body(400, r#"{"message":"Phone is required"}"#);
    assert_eq!(err.status, Some(400));
    assert_eq!(err.message.as_deref(), Some("Phone is required"));
    assert_eq!(err.to_string(), "Phone is required");
}

#[test]
fn api_error_from_body_without_message_uses_status() {
    let err = ApiError::from_body(502, "Bad Gateway");
    assert_eq!(err.message, None);
    assert_eq!(err.to_string(), "request failed: 502");
    let blank = ApiError::from_body(400, r#"{"message":"  "}"#);
    assert_eq!(blank.message, None);
}

#[test]
fn transport_errors_have_no_status() {
    let err = ApiError::transport("offline");
    assert_eq!(err.status, None);
    assert_eq!(err.to_string(), "offline");
}

#[test]
fn calls_fail_cleanly_outside_the_browser() {
    let config = ClientConfig::default();
    let result = futures::executor::block_on(fetch_events(&config));
    assert_eq!(result, Err("not available on server".to_owned()));
}
