use super::*;

// =============================================================
// UploadResponse
// =============================================================

#[test]
fn upload_response_parses_full_body() {
    let resp: UploadResponse =
        serde_json::from_str(r#"{"image_id": "abc", "image_url": "http://x/img.png"}"#).unwrap();
    assert_eq!(resp.image_id.as_deref(), Some("abc"));
    assert_eq!(resp.image_url.as_deref(), Some("http://x/img.png"));
}

#[test]
fn upload_response_parses_empty_body() {
    let resp: UploadResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.image_id.is_none());
    assert!(resp.image_url.is_none());
}

#[test]
fn require_both_succeeds_with_both_fields() {
    let resp: UploadResponse =
        serde_json::from_str(r#"{"image_id": "abc", "image_url": "http://x/img.png"}"#).unwrap();
    let (id, url) = resp.require_both().unwrap();
    assert_eq!(id, "abc");
    assert_eq!(url, "http://x/img.png");
}

#[test]
fn require_both_rejects_missing_id() {
    let resp: UploadResponse =
        serde_json::from_str(r#"{"image_url": "http://x/img.png"}"#).unwrap();
    assert!(matches!(resp.require_both(), Err(ApiError::Contract(_))));
}

#[test]
fn require_url_ignores_missing_id() {
    let resp: UploadResponse =
        serde_json::from_str(r#"{"image_url": "http://x/img.png"}"#).unwrap();
    assert_eq!(resp.require_url().unwrap(), "http://x/img.png");
}

#[test]
fn require_url_rejects_empty_body() {
    let resp: UploadResponse = serde_json::from_str("{}").unwrap();
    assert!(matches!(resp.require_url(), Err(ApiError::Contract(_))));
}

// =============================================================
// Object removal
// =============================================================

#[test]
fn remove_request_serializes_expected_fields() {
    let req = RemoveObjectRequest { image_id: "abc", mask_data: "data:image/png;base64,AAAA" };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "image_id": "abc",
            "mask_data": "data:image/png;base64,AAAA",
        })
    );
}

#[test]
fn remove_response_require_processed() {
    let ok: RemoveObjectResponse =
        serde_json::from_str(r#"{"processed_url": "http://x/out.png"}"#).unwrap();
    assert_eq!(ok.require_processed().unwrap(), "http://x/out.png");

    let missing: RemoveObjectResponse = serde_json::from_str("{}").unwrap();
    assert!(matches!(missing.require_processed(), Err(ApiError::Contract(_))));
}

// =============================================================
// Colorize / Enhance / Restore
// =============================================================

#[test]
fn colorize_request_addresses_image_by_url() {
    let req = ColorizeRequest { image_url: "http://x/img.png" };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({"image_url": "http://x/img.png"}));
}

#[test]
fn colorize_response_uses_its_own_field_name() {
    let ok: ColorizeResponse =
        serde_json::from_str(r#"{"processed_image_url": "http://x/c.png"}"#).unwrap();
    assert_eq!(ok.require_processed().unwrap(), "http://x/c.png");
}

#[test]
fn enhance_request_serializes_scale_and_face_enhance() {
    let req = EnhanceRequest { image_id: "abc", scale: 4, face_enhance: true };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"image_id": "abc", "scale": 4, "face_enhance": true})
    );
}

#[test]
fn enhance_response_require_enhanced() {
    let missing: EnhanceResponse = serde_json::from_str("{}").unwrap();
    assert!(matches!(missing.require_enhanced(), Err(ApiError::Contract(_))));
}

#[test]
fn restore_response_require_restored() {
    let ok: RestoreResponse =
        serde_json::from_str(r#"{"restored_url": "http://x/r.png"}"#).unwrap();
    assert_eq!(ok.require_restored().unwrap(), "http://x/r.png");
}

// =============================================================
// AspectRatio and GenerateRequest
// =============================================================

#[test]
fn aspect_ratio_dimensions() {
    assert_eq!(AspectRatio::Square.dimensions(), (1280, 1280));
    assert_eq!(AspectRatio::Wide.dimensions(), (1280, 720));
    assert_eq!(AspectRatio::Classic.dimensions(), (1280, 853));
    assert_eq!(AspectRatio::Portrait.dimensions(), (1024, 1280));
}

#[test]
fn aspect_ratio_labels_round_trip() {
    for aspect in AspectRatio::ALL {
        assert_eq!(AspectRatio::from_label(aspect.label()), aspect);
    }
}

#[test]
fn aspect_ratio_unknown_label_falls_back_to_square() {
    assert_eq!(AspectRatio::from_label("21:9"), AspectRatio::Square);
}

#[test]
fn generate_request_fills_fixed_schedule() {
    let req = GenerateRequest::new("a red fox", AspectRatio::Wide);
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "prompt": "a red fox",
            "width": 1280,
            "height": 720,
            "num_outputs": 1,
            "scheduler": "K_EULER",
            "num_inference_steps": 4,
            "guidance_scale": 0.0,
        })
    );
}

#[test]
fn generate_response_with_empty_list_is_still_success() {
    let resp: GenerateResponse = serde_json::from_str(r#"{"images": []}"#).unwrap();
    assert!(resp.require_images().unwrap().is_empty());
}

#[test]
fn generate_response_without_images_is_contract_failure() {
    let resp: GenerateResponse = serde_json::from_str("{}").unwrap();
    assert!(matches!(resp.require_images(), Err(ApiError::Contract(_))));
}

// =============================================================
// Animate
// =============================================================

#[test]
fn animate_request_carries_optional_image() {
    let with_image = AnimateRequest { prompt: "waves", image_url: Some("http://x/img.png") };
    let value = serde_json::to_value(&with_image).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"prompt": "waves", "image_url": "http://x/img.png"})
    );

    let without = AnimateRequest { prompt: "waves", image_url: None };
    let value = serde_json::to_value(&without).unwrap();
    assert_eq!(value, serde_json::json!({"prompt": "waves", "image_url": null}));
}

#[test]
fn animate_response_require_video() {
    let missing: AnimateResponse = serde_json::from_str("{}").unwrap();
    assert!(matches!(missing.require_video(), Err(ApiError::Contract(_))));
}

// =============================================================
// Gallery lists
// =============================================================

#[test]
fn pair_list_parses_pending_entries() {
    let resp: PairListResponse = serde_json::from_str(
        r#"{"images": [
            {"original_url": "http://x/a.png", "processed_url": "http://x/a-out.png"},
            {"original_url": "http://x/b.png"}
        ]}"#,
    )
    .unwrap();
    assert_eq!(resp.images.len(), 2);
    assert!(resp.images[0].processed_url.is_some());
    assert!(resp.images[1].processed_url.is_none());
}

#[test]
fn pair_list_parses_empty_body() {
    let resp: PairListResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.images.is_empty());
}

#[test]
fn enhance_list_uses_enhanced_url_key() {
    let resp: EnhanceListResponse = serde_json::from_str(
        r#"{"images": [{"original_url": "http://x/a.png", "enhanced_url": "http://x/a-big.png"}]}"#,
    )
    .unwrap();
    assert_eq!(resp.images[0].enhanced_url.as_deref(), Some("http://x/a-big.png"));
}

#[test]
fn video_list_tolerates_one_sided_entries() {
    let resp: VideoListResponse = serde_json::from_str(
        r#"{"videos": [
            {"processed_url": "http://x/clip.mp4"},
            {"original_url": "http://x/src.mp4"}
        ]}"#,
    )
    .unwrap();
    assert!(resp.videos[0].original_url.is_none());
    assert!(resp.videos[1].processed_url.is_none());
}
