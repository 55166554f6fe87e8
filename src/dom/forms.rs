//! Form validation and button loading states.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

#[cfg(feature = "web")]
use wasm_bindgen::JsCast;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Toast shown when required fields are missing.
pub const FILL_REQUIRED_TEXT: &str = "Заполните все обязательные поля";

/// Markup swapped into a button while it is loading.
pub const LOADING_MARKUP: &str = r#"<i class="fas fa-spinner fa-spin mr-2"></i>Загрузка..."#;

/// Class marking a field that failed validation.
pub const FIELD_ERROR_CLASS: &str = "border-red-500";

/// A required field fails validation when its trimmed value is empty.
pub fn is_missing(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check every required input, select, and textarea under the named form.
///
/// Empty fields get [`FIELD_ERROR_CLASS`], filled ones are cleared of it.
/// Returns overall validity; a failure also raises one error toast.
#[cfg(feature = "web")]
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: &str) -> bool {
    let Some(form) = super::element_by_id(form_id) else {
        return false;
    };
    let Ok(fields) = form.query_selector_all("input[required], select[required], textarea[required]")
    else {
        return false;
    };

    let mut valid = true;
    for i in 0..fields.length() {
        let Some(field) = fields.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        if is_missing(&field_value(&field)) {
            let _ = field.class_list().add_1(FIELD_ERROR_CLASS);
            valid = false;
        } else {
            let _ = field.class_list().remove_1(FIELD_ERROR_CLASS);
        }
    }

    if !valid {
        super::toast::show(FILL_REQUIRED_TEXT, "error");
    }
    valid
}

#[cfg(feature = "web")]
fn field_value(field: &web_sys::Element) -> String {
    if let Some(input) = field.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(select) = field.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.value()
    } else if let Some(textarea) = field.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

/// Toggle a button's loading state.
///
/// Loading disables the button, stashes its current label in a data
/// attribute, and swaps in the spinner markup; clearing restores the
/// stashed label. Clearing a button that was never set loading leaves its
/// label alone.
#[cfg(feature = "web")]
#[wasm_bindgen(js_name = setLoading)]
pub fn set_loading(button_id: &str, loading: bool) {
    let Some(button) = super::element_by_id(button_id)
        .and_then(|e| e.dyn_into::<web_sys::HtmlButtonElement>().ok())
    else {
        return;
    };

    if loading {
        button.set_disabled(true);
        let _ = button.set_attribute("data-original-text", &button.inner_html());
        button.set_inner_html(LOADING_MARKUP);
    } else {
        button.set_disabled(false);
        if let Some(original) = button.get_attribute("data-original-text") {
            button.set_inner_html(&original);
        }
    }
}
