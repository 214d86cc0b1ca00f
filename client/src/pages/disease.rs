//! Disease prediction from observed symptoms.

#[cfg(test)]
#[path = "disease_test.rs"]
mod disease_test;

use leptos::prelude::*;

/// Symptom keys understood by the disease predictor.
pub const SYMPTOMS: &[&str] = &[
    "anorexia", "abdominal_pain", "anaemia", "abortions", "acetone", "aggression", "arthrogyposis",
    "ankylosis", "anxiety", "bellowing", "blood_loss", "blood_poisoning", "blisters", "colic",
    "Condemnation_of_livers", "coughing", "depression", "discomfort", "dyspnea", "dysentery", "diarrhoea",
    "dehydration", "drooling", "dull", "decreased_fertility", "diffculty_breath", "emaciation", "encephalitis",
    "fever", "facial_paralysis", "frothing_of_mouth", "frothing", "gaseous_stomach", "highly_diarrhoea",
    "high_pulse_rate", "high_temp", "high_proportion", "hyperaemia", "hydrocephalus", "isolation_from_herd",
    "infertility", "intermittent_fever", "jaundice", "ketosis", "loss_of_appetite", "lameness",
    "lack_of-coordination", "lethargy", "lacrimation", "milk_flakes", "milk_watery", "milk_clots",
    "mild_diarrhoea", "moaning", "mucosal_lesions", "milk_fever", "nausea", "nasel_discharges", "oedema", "pain",
    "painful_tongue", "pneumonia", "photo_sensitization", "quivering_lips", "reduction_milk_vields",
    "rapid_breathing", "rumenstasis", "reduced_rumination", "reduced_fertility", "reduced_fat",
    "reduces_feed_intake", "raised_breathing", "stomach_pain", "salivation", "stillbirths", "shallow_breathing",
    "swollen_pharyngeal", "swelling", "saliva", "swollen_tongue", "tachycardia", "torticollis", "udder_swelling",
    "udder_heat", "udder_hardeness", "udder_redness", "udder_pain", "unwillingness_to_move", "ulcers",
    "vomiting", "weight_loss", "weakness",
];

/// Add `symptom` if absent, remove it if present. Selection order is kept.
pub fn toggle_symptom(selected: &mut Vec<String>, symptom: &str) {
    if let Some(pos) = selected.iter().position(|s| s == symptom) {
        selected.remove(pos);
    } else {
        selected.push(symptom.to_owned());
    }
}

pub fn symptom_label(symptom: &str) -> String {
    symptom.replace('_', " ")
}

pub fn validate_symptoms(selected: &[String]) -> Result<(), &'static str> {
    if selected.is_empty() { Err("Select at least one symptom") } else { Ok(()) }
}

#[component]
pub fn DiseaseQna() -> impl IntoView {
    let selected = RwSignal::new(Vec::<String>::new());
    let result = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::state::services::Services>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let symptoms = selected.get();
        if let Err(message) = validate_symptoms(&symptoms) {
            result.set(Some(Err(message.to_owned())));
            return;
        }
        busy.set(true);
        result.set(None);
        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            leptos::task::spawn_local(async move {
                let predicted = crate::net::api::predict_disease(&services.config, &symptoms).await;
                if let Err(e) = &predicted {
                    log::warn!("disease prediction failed: {e}");
                }
                result.set(Some(
                    predicted.map(|p| p.prediction).map_err(|_| "Prediction failed. Please try again.".to_owned()),
                ));
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = symptoms;
        }
    };

    let checkboxes = SYMPTOMS
        .iter()
        .enumerate()
        .map(|(i, symptom)| {
            let symptom = *symptom;
            let id = format!("symptom-{i}");
            view! {
                <div class="symptom">
                    <input
                        type="checkbox"
                        id=id.clone()
                        value=symptom
                        prop:checked=move || selected.with(|s| s.iter().any(|x| x == symptom))
                        on:change=move |_| selected.update(|s| toggle_symptom(s, symptom))
                    />
                    <label for=id>{symptom_label(symptom)}</label>
                </div>
            }
        })
        .collect_view();

    let outcome = move || {
        result.get().map(|r| match r {
            Ok(prediction) => view! { <div class="prediction">"Prediction: " {prediction}</div> }.into_any(),
            Err(message) => view! { <div class="prediction prediction--error">{message}</div> }.into_any(),
        })
    };

    view! {
        <div class="disease">
            <h2>"Cattle Disease Prediction"</h2>
            <form on:submit=on_submit>
                <label>"Select Symptoms"</label>
                <div class="symptom-grid">{checkboxes}</div>
                <p class="symptom-count">{move || format!("{} selected", selected.with(Vec::len))}</p>
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Predicting..." } else { "Predict" }}
                </button>
            </form>
            {outcome}
        </div>
    }
}
