use billetflow::modules::batches::{BatchItemStatus, NewBatchItem};
use billetflow::modules::gateways::GatewayResult;
use serde_json::json;

#[test]
fn test_created_response_becomes_done_item() {
    let result = GatewayResult::new(201, json!({ "id": 99, "description": "ok" }));

    let item = NewBatchItem::from_gateway_result(10, 5, &result);

    assert_eq!(item.batch_id, 10);
    assert_eq!(item.installment_id, 5);
    assert_eq!(item.status, BatchItemStatus::Done);
    assert_eq!(item.external_id, Some(99));
    assert_eq!(item.description.as_deref(), Some("ok"));
    assert_eq!(item.content, json!({ "id": 99, "description": "ok" }));
}

#[test]
fn test_created_response_without_description() {
    let result = GatewayResult::new(201, json!({ "id": 7 }));

    let item = NewBatchItem::from_gateway_result(1, 2, &result);

    assert_eq!(item.status, BatchItemStatus::Done);
    assert_eq!(item.external_id, Some(7));
    assert_eq!(item.description, None);
}

#[test]
fn test_rejection_with_erros_list_becomes_failed_item() {
    let result = GatewayResult::new(422, json!({ "erros": ["invalid"] }));

    let item = NewBatchItem::from_gateway_result(10, 5, &result);

    assert_eq!(item.status, BatchItemStatus::Failed);
    assert_eq!(item.external_id, None);
    let description = item.description.expect("failed items carry a description");
    assert!(description.contains("invalid"));
}

#[test]
fn test_rejection_falls_back_to_detail_field() {
    let result = GatewayResult::new(500, json!({ "detail": "provider unavailable" }));

    let item = NewBatchItem::from_gateway_result(10, 5, &result);

    assert_eq!(item.status, BatchItemStatus::Failed);
    assert_eq!(item.description.as_deref(), Some("provider unavailable"));
}

#[test]
fn test_erros_list_takes_precedence_over_detail() {
    let result = GatewayResult::new(422, json!({ "erros": ["bad amount"], "detail": "other" }));

    let item = NewBatchItem::from_gateway_result(10, 5, &result);

    let description = item.description.expect("failed items carry a description");
    assert!(description.contains("bad amount"));
    assert!(!description.contains("other"));
}

#[test]
fn test_rejection_without_known_fields_still_records_content() {
    let result = GatewayResult::new(400, json!({ "unexpected": true }));

    let item = NewBatchItem::from_gateway_result(10, 5, &result);

    assert_eq!(item.status, BatchItemStatus::Failed);
    // Content snapshot always attached, even when no description field matched
    assert_eq!(item.content, json!({ "unexpected": true }));
}

#[test]
fn test_status_renders_as_the_ledger_column_value() {
    // The ledger binds the display form into the varchar status column
    assert_eq!(BatchItemStatus::Done.to_string(), "done");
    assert_eq!(BatchItemStatus::Failed.to_string(), "failed");
}

#[test]
fn test_non_201_success_codes_are_not_done() {
    // The provider contract is 201 for creation; a plain 200 is not trusted
    let result = GatewayResult::new(200, json!({ "id": 99 }));

    let item = NewBatchItem::from_gateway_result(10, 5, &result);

    assert_eq!(item.status, BatchItemStatus::Failed);
    assert_eq!(item.external_id, None);
}
