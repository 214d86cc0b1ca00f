//! Cattle management: herd list, metrics, registration, vaccinations, and
//! breeding-partner recommendations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside the farmer area, so the farmer guard has already passed.
//! The backend authorizes every call on its own; this page only needs the
//! signed-in uid and a bearer token.

#[cfg(test)]
#[path = "cattle_test.rs"]
mod cattle_test;

use leptos::prelude::*;

use crate::net::types::{Cattle, DashboardMetrics, NewCattle, OTHER_DISEASE, Recommendation, ScoreTier, Vaccination};
use crate::state::remote::Remote;

pub const BREED_OPTIONS: &[&str] = &[
    "Gir",
    "Tharparkar",
    "Kankrej",
    "Rathi",
    "Ongole",
    "Deoni",
    "Malvi",
    "Hallikar",
    "Nagori",
    "Kherigarh",
    "Punganur",
    "Gaolao",
    "Nimari",
    "Kangayam",
    "Mewati",
    "Bargur",
    "Hariana",
    "Siri",
];

pub const DISEASE_OPTIONS: &[&str] = &[
    "None",
    "Abscess",
    "Actinomycosis",
    "Bovine Dermatophilosis (Rain Rot)",
    "Bovine Warts",
    "Bovine spongiform encephalopathy (BSE)",
    "Dermatophytosis",
    "Digital Dermatitis (also causes lameness)",
    "Foot and Mouth Disease",
    "Hoof Rot",
    "Lumpy Skin Diseases",
    "Mange",
    "Mastititis",
    "Pediculosis",
    "Photosensitization",
    "Pink Eye",
    "Healthy Cows",
    OTHER_DISEASE,
];

pub const GENDER_OPTIONS: &[&str] = &["Male", "Female"];

/// `(value, label)` pairs for the health select.
pub const HEALTH_OPTIONS: &[(&str, &str)] = &[("healthy", "Healthy"), ("sick", "Sick"), ("recovering", "Recovering")];

/// Check a registration form before it is sent.
pub fn validate_new_cattle(form: &NewCattle) -> Result<(), &'static str> {
    if form.name.trim().is_empty() {
        return Err("Name is required");
    }
    if !BREED_OPTIONS.contains(&form.breed.as_str()) {
        return Err("Select a breed");
    }
    if !GENDER_OPTIONS.contains(&form.gender.as_str()) {
        return Err("Select a gender");
    }
    if !is_non_negative_number(&form.age) {
        return Err("Age must be a number");
    }
    if !is_non_negative_number(&form.weight) {
        return Err("Weight must be a number");
    }
    if form.disease == OTHER_DISEASE && form.custom_disease.trim().is_empty() {
        return Err("Specify the disease");
    }
    Ok(())
}

/// Check a vaccination record. Dates are `YYYY-MM-DD`, as date inputs emit.
pub fn validate_vaccination(record: &Vaccination) -> Result<(), &'static str> {
    if record.name.trim().is_empty() {
        return Err("Vaccine name is required");
    }
    if record.date.is_empty() {
        return Err("Vaccination date is required");
    }
    if !record.next_due_date.is_empty() && record.next_due_date < record.date {
        return Err("Next due date must be after the vaccination date");
    }
    Ok(())
}

fn is_non_negative_number(raw: &str) -> bool {
    raw.trim().parse::<f64>().is_ok_and(|n| n.is_finite() && n >= 0.0)
}

/// Milk yield with thousands separators: `3200.0` -> `"3,200 L"`.
pub fn milk_yield_label(litres: f64) -> String {
    let rounded = format!("{:.0}", litres.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, digit) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if litres < 0.0 && rounded != "0" { "-" } else { "" };
    format!("{sign}{grouped} L")
}

pub fn score_label(score: f64) -> String {
    format!("{score:.2}")
}

/// Drop the animal with `id` from the list.
pub fn without_cattle(list: &[Cattle], id: &str) -> Vec<Cattle> {
    list.iter().filter(|c| c.id != id).cloned().collect()
}

fn or_placeholder(value: &str, placeholder: &'static str) -> String {
    if value.trim().is_empty() { placeholder.to_owned() } else { value.to_owned() }
}

/// Result of the last action, shown above the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Dialog {
    #[default]
    Closed,
    Add,
    Vaccinate,
    Detail,
    Breeding,
}

#[component]
pub fn CattleManagement() -> impl IntoView {
    let cattle = RwSignal::new(Remote::<Vec<Cattle>>::Loading);
    let metrics = RwSignal::new(None::<DashboardMetrics>);
    let selected = RwSignal::new(None::<Cattle>);
    let dialog = RwSignal::new(Dialog::Closed);
    let recommendations = RwSignal::new(Remote::<Vec<Recommendation>>::Loading);
    let form = RwSignal::new(NewCattle::default());
    let vaccination = RwSignal::new(Vaccination::default());
    let notice = RwSignal::new(None::<Notice>);

    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::state::services::Services>();

    #[cfg(feature = "hydrate")]
    {
        let services = services.clone();
        leptos::task::spawn_local(async move {
            let (subject, token) = match services.require_authorized().await {
                Ok(pair) => pair,
                Err(message) => {
                    cattle.set(Remote::Failed(message));
                    return;
                }
            };
            metrics.set(crate::net::api::fetch_metrics(&services.config, &token, &subject.uid).await);
            let loaded = crate::net::api::fetch_cattle(&services.config, &token, &subject.uid).await;
            if let Err(e) = &loaded {
                log::warn!("cattle list failed: {e}");
            }
            cattle.set(Remote::from_result(loaded.map_err(|_| "Failed to load dashboard. Please try again.".to_owned())));
        });
    }

    let open = move |target: Dialog, animal: Option<Cattle>| {
        if animal.is_some() {
            selected.set(animal);
        }
        dialog.set(target);
    };
    let close = move |_: leptos::ev::MouseEvent| dialog.set(Dialog::Closed);

    let on_add = {
        #[cfg(feature = "hydrate")]
        let services = services.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let draft = form.get();
            if let Err(message) = validate_new_cattle(&draft) {
                notice.set(Some(Notice::Error(message.to_owned())));
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                let services = services.clone();
                leptos::task::spawn_local(async move {
                    let added = async {
                        let (subject, token) = services.require_authorized().await?;
                        crate::net::api::add_cattle(&services.config, &token, &subject.uid, &draft).await
                    }
                    .await;
                    match added {
                        Ok(animal) => {
                            cattle.update(|state| {
                                if let Remote::Ready(list) = state {
                                    list.push(animal);
                                }
                            });
                            form.set(NewCattle::default());
                            dialog.set(Dialog::Closed);
                            notice.set(Some(Notice::Success("Cattle added successfully".to_owned())));
                        }
                        Err(e) => {
                            log::warn!("add cattle failed: {e}");
                            notice.set(Some(Notice::Error("Failed to add cattle".to_owned())));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = draft;
            }
        }
    };

    let on_vaccinate = {
        #[cfg(feature = "hydrate")]
        let services = services.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let record = vaccination.get();
            let Some(animal) = selected.get() else {
                notice.set(Some(Notice::Error("Select a cattle first".to_owned())));
                return;
            };
            if let Err(message) = validate_vaccination(&record) {
                notice.set(Some(Notice::Error(message.to_owned())));
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                let services = services.clone();
                leptos::task::spawn_local(async move {
                    let saved = async {
                        let token = services.require_bearer().await?;
                        crate::net::api::add_vaccination(&services.config, &token, &animal.id, &record).await
                    }
                    .await;
                    match saved {
                        Ok(()) => {
                            vaccination.set(Vaccination::default());
                            dialog.set(Dialog::Closed);
                            notice.set(Some(Notice::Success("Vaccination record added".to_owned())));
                        }
                        Err(e) => {
                            log::warn!("add vaccination failed: {e}");
                            notice.set(Some(Notice::Error("Failed to add vaccination record".to_owned())));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (animal, record);
            }
        }
    };

    let on_delete = {
        #[cfg(feature = "hydrate")]
        let services = services.clone();
        move |_: leptos::ev::MouseEvent| {
            let Some(animal) = selected.get() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let services = services.clone();
                leptos::task::spawn_local(async move {
                    let deleted = async {
                        let token = services.require_bearer().await?;
                        crate::net::api::delete_cattle(&services.config, &token, &animal.id).await
                    }
                    .await;
                    match deleted {
                        Ok(()) => {
                            cattle.update(|state| {
                                if let Remote::Ready(list) = state {
                                    *list = without_cattle(list, &animal.id);
                                }
                            });
                            selected.set(None);
                            dialog.set(Dialog::Closed);
                            notice.set(Some(Notice::Success("Cattle deleted successfully".to_owned())));
                        }
                        Err(e) => {
                            log::warn!("delete cattle failed: {e}");
                            notice.set(Some(Notice::Error("Failed to delete cattle".to_owned())));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = animal;
            }
        }
    };

    let on_recommend = {
        #[cfg(feature = "hydrate")]
        let services = services.clone();
        move |_: leptos::ev::MouseEvent| {
            let Some(animal) = selected.get() else {
                return;
            };
            recommendations.set(Remote::Loading);
            dialog.set(Dialog::Breeding);
            #[cfg(feature = "hydrate")]
            {
                let services = services.clone();
                leptos::task::spawn_local(async move {
                    let loaded = crate::net::api::fetch_recommendations(&services.config, &animal.breed).await;
                    if let Err(e) = &loaded {
                        log::warn!("recommendations failed: {e}");
                    }
                    recommendations.set(Remote::from_result(
                        loaded.map_err(|_| "Failed to fetch breeding recommendations".to_owned()),
                    ));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = animal;
            }
        }
    };

    let metric_cards = move || {
        metrics.get().map(|m| {
            view! {
                <div class="metrics">
                    <div class="metric"><h3>"Total Cattle"</h3><p>{m.total_cattle}</p></div>
                    <div class="metric"><h3>"Healthy Cattle"</h3><p>{m.cattle_health_summary.healthy}</p></div>
                    <div class="metric"><h3>"Upcoming Vaccinations"</h3><p>{m.upcoming_vaccinations.len()}</p></div>
                </div>
            }
        })
    };

    let notice_view = move || {
        notice.get().map(|n| {
            let (class, text) = match n {
                Notice::Success(text) => ("notice notice--success", text),
                Notice::Error(text) => ("notice notice--error", text),
            };
            view! {
                <div class=class>
                    <span>{text}</span>
                    <button on:click=move |_| notice.set(None)>"×"</button>
                </div>
            }
        })
    };

    let rows = move || {
        cattle.with(|state| match state {
            Remote::Loading => view! { <tr><td colspan="6">"Loading..."</td></tr> }.into_any(),
            Remote::Failed(message) => view! { <tr><td colspan="6">"Error: " {message.clone()}</td></tr> }.into_any(),
            Remote::Ready(list) if list.is_empty() => {
                view! { <tr><td colspan="6">"No cattle registered yet"</td></tr> }.into_any()
            }
            Remote::Ready(list) => list
                .iter()
                .cloned()
                .map(|animal| {
                    let health_class =
                        if animal.is_healthy() { "badge badge--healthy" } else { "badge badge--unwell" };
                    let for_vaccine = animal.clone();
                    let for_detail = animal.clone();
                    view! {
                        <tr>
                            <td>{animal.name}</td>
                            <td>{animal.breed}</td>
                            <td>{animal.age} " years"</td>
                            <td><span class=health_class>{animal.health_status}</span></td>
                            <td>{animal.disease}</td>
                            <td class="actions">
                                <button
                                    title="Add vaccination"
                                    on:click=move |_| open(Dialog::Vaccinate, Some(for_vaccine.clone()))
                                >
                                    "+"
                                </button>
                                <button title="Details" on:click=move |_| open(Dialog::Detail, Some(for_detail.clone()))>
                                    "i"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any(),
        })
    };

    view! {
        <div class="cattle">
            {notice_view}
            {metric_cards}
            <div class="cattle__list">
                <div class="cattle__header">
                    <h2>"My Cattle"</h2>
                    <button class="button button--primary" on:click=move |_| open(Dialog::Add, None)>
                        "Add Cattle"
                    </button>
                </div>
                <table class="cattle__table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Breed"</th>
                            <th>"Age"</th>
                            <th>"Health Status"</th>
                            <th>"Disease"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <Show when=move || dialog.get() == Dialog::Detail>
                <div class="modal">
                    <div class="modal__panel">
                        <button class="modal__close" on:click=close>"×"</button>
                        {move || selected.get().map(|animal| view! {
                            <h2>"Cattle Details: " {animal.name.clone()}</h2>
                            <div class="modal__grid">
                                <div>
                                    <h3>"Basic Information"</h3>
                                    <p><strong>"Breed: "</strong>{animal.breed.clone()}</p>
                                    <p><strong>"Gender: "</strong>{animal.gender.clone()}</p>
                                    <p><strong>"Age: "</strong>{animal.age.clone()} " years"</p>
                                    <p><strong>"Color: "</strong>{or_placeholder(&animal.color, "N/A")}</p>
                                </div>
                                <div>
                                    <h3>"Health Information"</h3>
                                    <p><strong>"Health Status: "</strong>{animal.health_status.clone()}</p>
                                    <p><strong>"Disease: "</strong>{animal.disease.clone()}</p>
                                </div>
                                <div>
                                    <h3>"Additional Details"</h3>
                                    <p><strong>"Ear Tag: "</strong>{or_placeholder(&animal.ear_tag, "N/A")}</p>
                                    <p><strong>"Paddock Location: "</strong>{or_placeholder(&animal.paddock_location, "N/A")}</p>
                                    <p><strong>"Special Notes: "</strong>{or_placeholder(&animal.special_notes, "None")}</p>
                                </div>
                            </div>
                        })}
                        <div class="modal__actions">
                            <button class="button button--primary" on:click=on_recommend.clone()>"Find Breeding Pair"</button>
                            <button class="button button--danger" on:click=on_delete.clone()>"Delete"</button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || dialog.get() == Dialog::Breeding>
                <div class="modal">
                    <div class="modal__panel">
                        <button class="modal__close" on:click=close>"×"</button>
                        <h2>"Breeding Pair Recommendations"</h2>
                        <RecommendationTable recommendations=recommendations/>
                    </div>
                </div>
            </Show>

            <Show when=move || dialog.get() == Dialog::Vaccinate>
                <div class="modal">
                    <form class="modal__panel" on:submit=on_vaccinate.clone()>
                        <button type="button" class="modal__close" on:click=close>"×"</button>
                        <h2>"Add Vaccination: " {move || selected.get().map(|a| a.name).unwrap_or_default()}</h2>
                        <label>"Vaccine Name"</label>
                        <input
                            type="text"
                            required
                            prop:value=move || vaccination.with(|v| v.name.clone())
                            on:input=move |ev| vaccination.update(|v| v.name = event_target_value(&ev))
                        />
                        <label>"Date"</label>
                        <input
                            type="date"
                            required
                            prop:value=move || vaccination.with(|v| v.date.clone())
                            on:input=move |ev| vaccination.update(|v| v.date = event_target_value(&ev))
                        />
                        <label>"Next Due Date"</label>
                        <input
                            type="date"
                            prop:value=move || vaccination.with(|v| v.next_due_date.clone())
                            on:input=move |ev| vaccination.update(|v| v.next_due_date = event_target_value(&ev))
                        />
                        <button class="button button--primary" type="submit">"Save"</button>
                    </form>
                </div>
            </Show>

            <Show when=move || dialog.get() == Dialog::Add>
                <div class="modal">
                    <form class="modal__panel" on:submit=on_add.clone()>
                        <button type="button" class="modal__close" on:click=close>"×"</button>
                        <h2>"Register New Cattle"</h2>
                        <div class="modal__grid">
                            <h3>"Basic Information"</h3>
                            {form_input(form, "Name", "text", |f| &f.name, |f, v| f.name = v)}
                            {form_select(form, "Breed", "Select Breed", BREED_OPTIONS, |f| &f.breed, |f, v| f.breed = v)}
                            {form_select(form, "Gender", "Select Gender", GENDER_OPTIONS, |f| &f.gender, |f, v| f.gender = v)}
                            {form_input(form, "Date of Birth", "date", |f| &f.date_of_birth, |f, v| f.date_of_birth = v)}
                            <h3>"Physical Characteristics"</h3>
                            {form_input(form, "Age (years)", "number", |f| &f.age, |f, v| f.age = v)}
                            {form_input(form, "Weight (lbs)", "number", |f| &f.weight, |f, v| f.weight = v)}
                            {form_input(form, "Height", "number", |f| &f.height, |f, v| f.height = v)}
                            {form_input(form, "Color", "text", |f| &f.color, |f, v| f.color = v)}
                            <h3>"Health Information"</h3>
                            <label>"Health Status"</label>
                            <select on:change=move |ev| form.update(|f| f.health_status = event_target_value(&ev))>
                                {HEALTH_OPTIONS
                                    .iter()
                                    .map(|(value, label)| {
                                        let value = *value;
                                        view! {
                                            <option value=value selected=move || form.with(|f| f.health_status == value)>
                                                {*label}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                            {form_select(form, "Disease", "", DISEASE_OPTIONS, |f| &f.disease, |f, v| f.disease = v)}
                            <Show when=move || form.with(|f| f.disease == OTHER_DISEASE)>
                                {form_input(form, "Specify Custom Disease", "text", |f| &f.custom_disease, |f, v| f.custom_disease = v)}
                            </Show>
                            {form_input(form, "Last Veterinary Checkup", "date", |f| &f.last_veterinary_checkup, |f, v| {
                                f.last_veterinary_checkup = v;
                            })}
                            <h3>"Breeding"</h3>
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.is_breeding_stock)
                                    on:change=move |ev| form.update(|f| f.is_breeding_stock = event_target_checked(&ev))
                                />
                                " Breeding stock"
                            </label>
                            <label>"Number of Calves"</label>
                            <input
                                type="number"
                                min="0"
                                prop:value=move || form.with(|f| f.number_of_calves.to_string())
                                on:input=move |ev| {
                                    let calves = event_target_value(&ev).trim().parse().unwrap_or(0);
                                    form.update(|f| f.number_of_calves = calves);
                                }
                            />
                            <h3>"Identification"</h3>
                            {form_input(form, "Ear Tag", "text", |f| &f.ear_tag, |f, v| f.ear_tag = v)}
                            {form_input(form, "Paddock Location", "text", |f| &f.paddock_location, |f, v| f.paddock_location = v)}
                            {form_input(form, "Special Notes", "text", |f| &f.special_notes, |f, v| f.special_notes = v)}
                        </div>
                        <button class="button button--primary" type="submit">"Add Cattle"</button>
                    </form>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn RecommendationTable(recommendations: RwSignal<Remote<Vec<Recommendation>>>) -> impl IntoView {
    move || {
        recommendations.with(|state| match state {
            Remote::Loading => view! { <p class="list-status">"Loading recommendations..."</p> }.into_any(),
            Remote::Failed(message) => view! { <p class="list-status list-status--error">{message.clone()}</p> }.into_any(),
            Remote::Ready(list) if list.is_empty() => {
                view! { <p class="list-status">"No breeding recommendations available"</p> }.into_any()
            }
            Remote::Ready(list) => {
                let rows = list
                    .iter()
                    .map(|r| {
                        view! {
                            <tr>
                                <td>{r.breed.clone()}</td>
                                <td class="numeric">{milk_yield_label(r.milk_yield)}</td>
                                <td class="numeric">
                                    <span class=ScoreTier::of(r.score).css_class()>{score_label(r.score)}</span>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view();
                view! {
                    <table class="recommendations">
                        <thead>
                            <tr>
                                <th>"Breed"</th>
                                <th class="numeric">"Milk Yield"</th>
                                <th class="numeric">"Compatibility Score"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                }
                .into_any()
            }
        })
    }
}

fn form_input(
    form: RwSignal<NewCattle>,
    label: &'static str,
    kind: &'static str,
    get: fn(&NewCattle) -> &String,
    set: fn(&mut NewCattle, String),
) -> impl IntoView {
    view! {
        <label>{label}</label>
        <input
            type=kind
            prop:value=move || form.with(|f| get(f).clone())
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

fn form_select(
    form: RwSignal<NewCattle>,
    label: &'static str,
    prompt: &'static str,
    options: &'static [&'static str],
    get: fn(&NewCattle) -> &String,
    set: fn(&mut NewCattle, String),
) -> impl IntoView {
    let prompt = (!prompt.is_empty()).then(|| view! { <option value="">{prompt}</option> });
    let choices = options
        .iter()
        .map(|option| {
            let option = *option;
            view! { <option value=option selected=move || form.with(|f| get(f) == option)>{option}</option> }
        })
        .collect_view();
    view! {
        <label>{label}</label>
        <select on:change=move |ev| form.update(|f| set(f, event_target_value(&ev)))>
            {prompt}
            {choices}
        </select>
    }
}
