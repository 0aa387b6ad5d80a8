use super::*;

use chrono::{TimeZone, Utc};
use shared::domain::{Product, ProductId};

fn filled_form() -> AddressForm {
    AddressForm {
        email: "user@example.com".to_string(),
        phone: "+92300 1234567".to_string(),
        name: "Test User".to_string(),
        address: "1 Main St".to_string(),
        city: "Lahore".to_string(),
        postal_code: "54000".to_string(),
        state: "Punjab".to_string(),
        country: "Pakistan".to_string(),
    }
}

fn product(id: i64, price_cents: i64) -> Product {
    Product {
        id: ProductId(id),
        name: format!("Product {id}"),
        category: "Teas".to_string(),
        description: String::new(),
        price_cents,
        image_ref: String::new(),
        benefits: Vec::new(),
        review_count: 0,
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn empty_form_reports_every_field() {
    let errors = AddressForm::default()
        .validate()
        .expect_err("empty form must not validate");
    assert_eq!(errors.len(), AddressField::ALL.len());

    let phone = errors
        .iter()
        .find(|e| e.field == AddressField::Phone)
        .expect("phone error present");
    assert_eq!(phone.message, "Phone number is required");

    let postal = errors
        .iter()
        .find(|e| e.field == AddressField::PostalCode)
        .expect("postal code error present");
    assert_eq!(postal.message, "Postal code is required");
}

#[test]
fn email_must_look_like_an_email() {
    for bad in ["", "plainaddress", "user example@x.com", "user@nodot", "user@.com"] {
        let mut form = filled_form();
        form.email = bad.to_string();
        let errors = form.validate().expect_err("invalid email must fail");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, AddressField::Email);
        assert_eq!(errors[0].message, "Must be valid");
    }

    let mut form = filled_form();
    form.email = "a@b.co".to_string();
    form.validate().expect("plain address validates");
}

#[test]
fn valid_form_becomes_an_address() {
    let address = filled_form().validate().expect("filled form validates");
    assert_eq!(address.email, "user@example.com");
    assert_eq!(address.postal_code, "54000");
}

#[test]
fn reset_clears_every_field() {
    let mut form = filled_form();
    form.reset();
    assert_eq!(form, AddressForm::default());
}

#[test]
fn draft_needs_lines_before_an_address() {
    let mut cart = Cart::default();
    assert_eq!(build_cod_draft(&cart), Err(CheckoutBlocked::EmptyCart));

    cart.add(&product(1, 2499));
    assert_eq!(build_cod_draft(&cart), Err(CheckoutBlocked::MissingAddress));
    assert_eq!(
        CheckoutBlocked::MissingAddress.toast(),
        "Please provide a delivery address!"
    );
}

#[test]
fn draft_carries_lines_address_and_subtotal() {
    let mut cart = Cart::default();
    cart.add(&product(1, 2499));
    cart.add(&product(1, 2499));
    cart.add(&product(2, 1850));
    let address = filled_form().validate().expect("filled form validates");
    cart.set_address(address);

    let draft = build_cod_draft(&cart).expect("cart with address drafts");
    assert_eq!(draft.lines.len(), 2);
    assert_eq!(draft.subtotal_cents, 2 * 2499 + 1850);
    assert_eq!(draft.customer_email, "user@example.com");
    assert_eq!(draft.customer_name, "Test User");
    assert_eq!(draft.customer_phone, "+92300 1234567");
    assert_eq!(draft.shipping_address.city, "Lahore");
}

#[tokio::test]
async fn local_gateway_receipts_match_the_draft() {
    let mut cart = Cart::default();
    cart.add(&product(1, 2499));
    cart.set_address(filled_form().validate().expect("filled form validates"));
    let draft = build_cod_draft(&cart).expect("cart with address drafts");

    let gateway = LocalOrderGateway::new(Duration::ZERO);
    let receipt = gateway
        .place_cod_order(&draft)
        .await
        .expect("demo gateway accepts");
    assert_eq!(receipt.total_cents, draft.subtotal_cents);
}

#[tokio::test]
async fn local_gateway_rejects_a_lineless_draft() {
    let mut cart = Cart::default();
    cart.add(&product(1, 2499));
    cart.set_address(filled_form().validate().expect("filled form validates"));
    let mut draft = build_cod_draft(&cart).expect("cart with address drafts");
    draft.lines.clear();

    let gateway = LocalOrderGateway::new(Duration::ZERO);
    let err = gateway
        .place_cod_order(&draft)
        .await
        .expect_err("lineless draft is rejected");
    assert!(matches!(err, StorefrontError::OrderRejected(_)));
}
