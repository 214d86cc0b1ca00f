//! Breeding-pair compatibility form.
//!
//! The predictor takes `Cow` and `Bull` objects plus pair-level fields, so
//! the flat `Cow_*` / `Bull_*` form keys are regrouped before posting.

#[cfg(test)]
#[path = "breed_test.rs"]
mod breed_test;

use leptos::prelude::*;
use serde_json::{Map, Number, Value};

use crate::net::types::PairPrediction;

/// Form keys, in display order.
pub const PAIR_FIELDS: &[&str] = &[
    "Cow_Breed",
    "Cow_Age",
    "Cow_Weight",
    "Cow_Height",
    "Cow_Milk_Yield",
    "Cow_Health_Status",
    "Cow_Drought_Resistance",
    "Cow_Temperament",
    "Bull_Breed",
    "Bull_Age",
    "Bull_Weight",
    "Bull_Height",
    "Bull_Health_Status",
    "Bull_Mother_Milk_Yield",
    "Bull_Drought_Resistance",
    "Bull_Temperament",
    "Same_Parents",
    "Trait_Difference",
    "Genetic_Diversity",
    "Fertility_Rate",
    "Breeding_Success_Rate",
    "Disease_Resistance_Score",
    "Market_Value",
    "Past_Breeding_Success",
    "Bull_Past_Breeding_Success",
    "Cow_Past_Breeding_Success",
    "Bull_Fertility_Rate",
    "Cow_Fertility_Rate",
    "Bull_Breeding_Success_Rate",
    "Cow_Breeding_Success_Rate",
    "Bull_Market_Value",
    "Cow_Market_Value",
    "Cow_Mother_Milk_Yield",
];

/// Pair-level keys the predictor types as text.
const TEXT_FIELDS: &[&str] = &["Past_Breeding_Success"];

pub fn field_label(key: &str) -> String {
    key.replace('_', " ")
}

/// Numeric text becomes a JSON number; blanks are dropped.
fn field_value(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Some(Value::from(n));
    }
    if let Some(n) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
        return Some(Value::Number(n));
    }
    Some(Value::String(raw.to_owned()))
}

/// Regroup `(key, value)` pairs into the predictor's request body.
pub fn pair_payload<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Value {
    let mut cow = Map::new();
    let mut bull = Map::new();
    let mut top = Map::new();
    for (key, raw) in fields {
        if let Some(rest) = key.strip_prefix("Cow_") {
            if let Some(value) = field_value(raw) {
                cow.insert(rest.to_owned(), value);
            }
        } else if let Some(rest) = key.strip_prefix("Bull_") {
            if let Some(value) = field_value(raw) {
                bull.insert(rest.to_owned(), value);
            }
        } else if TEXT_FIELDS.contains(&key) {
            let raw = raw.trim();
            if !raw.is_empty() {
                top.insert(key.to_owned(), Value::String(raw.to_owned()));
            }
        } else if let Some(value) = field_value(raw) {
            top.insert(key.to_owned(), value);
        }
    }
    top.insert("Cow".to_owned(), Value::Object(cow));
    top.insert("Bull".to_owned(), Value::Object(bull));
    Value::Object(top)
}

pub fn is_good_pair(prediction: &PairPrediction) -> bool {
    prediction.prediction == "Good Pair"
}

pub fn prediction_label(prediction: &PairPrediction) -> String {
    match prediction.probability {
        Some(p) => format!("{} ({:.1}% confidence)", prediction.prediction, p * 100.0),
        None => prediction.prediction.clone(),
    }
}

#[component]
pub fn BreedCompatibility() -> impl IntoView {
    let values = RwSignal::new(vec![String::new(); PAIR_FIELDS.len()]);
    let result = RwSignal::new(None::<Result<PairPrediction, String>>);
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::state::services::Services>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = values.with(|v| pair_payload(PAIR_FIELDS.iter().copied().zip(v.iter().map(String::as_str))));
        busy.set(true);
        result.set(None);
        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            leptos::task::spawn_local(async move {
                let predicted = crate::net::api::predict_pair(&services.config, &payload).await;
                if let Err(e) = &predicted {
                    log::warn!("pair prediction failed: {e}");
                }
                result.set(Some(predicted.map_err(|_| "Prediction failed. Please check the values and try again.".to_owned())));
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    };

    let inputs = PAIR_FIELDS
        .iter()
        .enumerate()
        .map(|(i, key)| {
            view! {
                <div class="breed-form__field">
                    <label for=*key>{field_label(key)}</label>
                    <input
                        id=*key
                        name=*key
                        type="text"
                        required
                        prop:value=move || values.with(|v| v.get(i).cloned().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            values.update(|v| {
                                if let Some(slot) = v.get_mut(i) {
                                    *slot = value;
                                }
                            });
                        }
                    />
                </div>
            }
        })
        .collect_view();

    let outcome = move || {
        result.get().map(|r| match r {
            Ok(p) => {
                let class = if is_good_pair(&p) { "pair-result pair-result--good" } else { "pair-result pair-result--bad" };
                view! { <div class=class>{prediction_label(&p)}</div> }.into_any()
            }
            Err(message) => view! { <div class="pair-result pair-result--error">{message}</div> }.into_any(),
        })
    };

    view! {
        <div class="breed">
            <form class="breed-form" on:submit=on_submit>
                <h2>"Breeding Data Form"</h2>
                {inputs}
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Predicting..." } else { "Submit" }}
                </button>
            </form>
            {outcome}
        </div>
    }
}
