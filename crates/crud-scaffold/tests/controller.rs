// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end controller scenarios over the sports-store fixtures.

mod common;

use common::{Product, Products, product_controller};
use crud_scaffold::{
    ActionResult, CrudHooks, FormValues, HookError, MemberPresentation, MemberValue, ModelState,
    Redirect, Repository, RuleViolation, TempData, Validate, ViewMode, ViewName
};

fn index_names(result: &ActionResult<Product>) -> Vec<String> {
    result
        .as_view()
        .and_then(|view| view.model.as_index())
        .expect("index model")
        .instances()
        .iter()
        .map(|instance| instance.entity().name.clone())
        .collect()
}

fn all_names(repo: &Products) -> Vec<String> {
    repo.get_all()
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect()
}

#[test]
fn first_page_of_three_products() {
    let controller = product_controller(2);
    let result = controller.index(Some(1), &mut TempData::new()).unwrap();

    assert_eq!(result.view_name(), Some(ViewName::Index));
    assert_eq!(index_names(&result), ["Football", "Surf board"]);
    let model = result.as_view().unwrap().model.as_index().unwrap();
    assert_eq!(model.instances().total_pages(), 2);
    assert_eq!(model.instances().total_count(), 3);
}

#[test]
fn huge_page_redirects_to_last() {
    let controller = product_controller(2);
    let mut temp = TempData::new();

    let result = controller.index(Some(1_000_000), &mut temp).unwrap();
    assert_eq!(result.as_redirect(), Some(&Redirect::Index { page: 2 }));

    let follow_up = controller.index(Some(2), &mut temp).unwrap();
    assert_eq!(index_names(&follow_up), ["Running shoes"]);
}

#[test]
fn empty_name_rerenders_edit() {
    let controller = product_controller(5);
    let form: FormValues = [("Name", ""), ("Description", "Ball"), ("Price", "25")]
        .into_iter()
        .collect();

    let view = controller.edit_post(&1, &form).unwrap().into_view().unwrap();

    assert_eq!(view.view, ViewName::Edit);
    assert!(view.model_state.contains("Name", "Name must be set."));
    assert!(view.model_state.contains("", "Error editing Product."));
    assert_eq!(controller.repository().get(&1).unwrap().unwrap().name, "Football");
}

#[test]
fn missing_key_renders_not_found() {
    let controller = product_controller(5);
    let result = controller.details(&4).unwrap();

    assert_eq!(result.view_name(), Some(ViewName::EntityNotFound));
    assert_eq!(result.as_view().unwrap().model.as_not_found(), Some("4"));
}

#[test]
fn over_posting_is_ignored() {
    let controller = product_controller(5);
    let form: FormValues = [
        ("ProductID", "99"),
        ("Name", "Match ball"),
        ("RowVersion", "7"),
        ("IsAdmin", "true")
    ]
    .into_iter()
    .collect();

    let result = controller.edit_post(&1, &form).unwrap();
    assert_eq!(
        result.as_redirect(),
        Some(&Redirect::Details {
            key: "1".into()
        })
    );

    let stored = controller.repository().get(&1).unwrap().unwrap();
    assert_eq!(stored.product_id, 1);
    assert_eq!(stored.name, "Match ball");
    assert!(controller.repository().get(&99).unwrap().is_none());
}

#[test]
fn create_details_delete_round_trip() {
    let controller = product_controller(5);
    let form: FormValues = [
        ("Name", "Kayak"),
        ("Description", "A boat for one"),
        ("Price", "275.5"),
        ("CategoryID", "2")
    ]
    .into_iter()
    .collect();

    let key = match controller.create_post(&form).unwrap() {
        ActionResult::Redirect(Redirect::Details {
            key
        }) => key,
        other => panic!("expected redirect, got {other:?}")
    };
    assert_eq!(key, "4");
    assert!(all_names(controller.repository()).contains(&"Kayak".to_owned()));

    let details = controller.details(&4).unwrap();
    let instance = details.as_view().unwrap().model.as_instance().unwrap();
    assert_eq!(instance.key(), "4");
    let price = instance.member("Price").unwrap();
    let MemberValue::Single(price) = price else {
        panic!("price is single-valued");
    };
    assert_eq!(price.value(), "275.50");
    assert_eq!(price.visible_value(), "$275.50");
    let category = instance.member("CategoryID").unwrap();
    let MemberValue::Single(category) = category else {
        panic!("category is single-valued");
    };
    assert_eq!(category.visible_value(), "Watersports");

    let deleted = controller.delete_post(&4).unwrap();
    assert_eq!(deleted.view_name(), Some(ViewName::Deleted));
    assert!(!all_names(controller.repository()).contains(&"Kayak".to_owned()));
}

#[test]
fn violations_are_stable_on_unchanged_entity() {
    let product = Product {
        name: "  ".into(),
        description: "x".repeat(501),
        ..Default::default()
    };
    let first = product.rule_violations();
    let second = product.rule_violations();
    assert_eq!(first, second);
    assert_eq!(
        first,
        [
            RuleViolation::new("Name", "Name must be set."),
            RuleViolation::new("Description", "Description must have a maximum of 500 chars.")
        ]
    );
}

#[test]
fn edit_form_presents_choices() {
    let controller = product_controller(5);
    let result = controller.edit(&2).unwrap();
    let instance = result.as_view().unwrap().model.as_instance().unwrap();
    assert_eq!(instance.view_mode(), ViewMode::Edit);

    let MemberValue::Single(category) = instance.member("CategoryID").unwrap() else {
        panic!("category is single-valued");
    };
    assert_eq!(category.presentation(), MemberPresentation::Editable);
    let choices = category.choices();
    assert_eq!(choices.len(), 3);
    assert!(choices[1].selected);
    assert_eq!(choices[1].text, "Watersports");

    let MemberValue::Single(id) = instance.member("ProductID").unwrap() else {
        panic!("id is single-valued");
    };
    assert_eq!(id.presentation(), MemberPresentation::Hidden);
}

struct Guard;

impl CrudHooks<Product> for Guard {
    fn before_create(&self, product: &mut Product) -> Result<(), HookError> {
        product.name = product.name.trim().to_owned();
        Ok(())
    }

    fn before_edit(&self, product: &mut Product) -> Result<(), HookError> {
        if product.price < 0.0 {
            return Err(HookError::Violations(vec![RuleViolation::new(
                "Price",
                "Price must not be negative."
            )]));
        }
        Ok(())
    }
}

#[test]
fn hooks_run_before_persisting() {
    let controller = product_controller(5).with_hooks(Guard);

    let form: FormValues = [("Name", "  Whistle  "), ("Description", "Loud"), ("Price", "3")]
        .into_iter()
        .collect();
    controller.create_post(&form).unwrap();
    assert!(all_names(controller.repository()).contains(&"Whistle".to_owned()));

    let form: FormValues = [("Price", "-1")].into_iter().collect();
    let view = controller.edit_post(&1, &form).unwrap().into_view().unwrap();
    let state: &ModelState = &view.model_state;
    assert!(state.contains("Price", "Price must not be negative."));
    assert_eq!(controller.repository().get(&1).unwrap().unwrap().price, 25.0);
}

#[test]
fn failed_create_keeps_submitted_values() {
    let controller = product_controller(5);
    let form: FormValues = [("Name", "Goal"), ("Price", "lots")].into_iter().collect();

    let view = controller.create_post(&form).unwrap().into_view().unwrap();
    assert_eq!(view.view, ViewName::Create);
    assert_eq!(view.model_state.errors_for("Price").count(), 1);
    assert!(view.model_state.contains("Description", "Description must be set."));

    let instance = view.model.as_instance().unwrap();
    assert_eq!(instance.entity().name, "Goal");
    assert_eq!(instance.key(), "");
    assert_eq!(controller.repository().count().unwrap(), 3);
}
