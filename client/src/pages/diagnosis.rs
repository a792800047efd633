//! Diagnosis tab: observation form and result card.

use leptos::prelude::*;

use crate::components::diagnosis_result::DiagnosisResultCard;
use crate::state::diagnosis::DiagnosisState;
use crate::state::forms::DiagnosisForm;

/// Submits alert/metrics/log text for analysis and shows the result.
#[component]
pub fn DiagnosisPanel() -> impl IntoView {
    let diagnosis = expect_context::<RwSignal<DiagnosisState>>();
    let form = expect_context::<RwSignal<DiagnosisForm>>();
    let pending = Memo::new(move |_| diagnosis.with(|s| s.pending));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = form.get_untracked().payload();
        diagnosis.update(DiagnosisState::begin);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::analyze(&request).await;
            match diagnosis.try_update(|s| s.apply_result(result)).flatten() {
                Some(message) => crate::util::alert::alert(&message),
                None => form.update(DiagnosisForm::reset),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="tab-pane active diagnosis-panel">
            <form id="diagnosisForm" on:submit=on_submit>
                <label class="form-label" for="alertInfo">"Alert"</label>
                <textarea
                    class="form-control"
                    id="alertInfo"
                    name="alert_info"
                    rows="3"
                    prop:value=move || form.with(|f| f.alert_info.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.alert_info = value);
                    }
                ></textarea>
                <label class="form-label" for="metricsInfo">"Metrics"</label>
                <textarea
                    class="form-control"
                    id="metricsInfo"
                    name="metrics_info"
                    rows="3"
                    prop:value=move || form.with(|f| f.metrics_info.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.metrics_info = value);
                    }
                ></textarea>
                <label class="form-label" for="logInfo">"Logs"</label>
                <textarea
                    class="form-control"
                    id="logInfo"
                    name="log_info"
                    rows="5"
                    prop:value=move || form.with(|f| f.log_info.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.log_info = value);
                    }
                ></textarea>
                <button class="btn btn--primary" type="submit">
                    {move || if pending.get() { "Analyzing..." } else { "Analyze" }}
                </button>
            </form>
            <DiagnosisResultCard/>
        </div>
    }
}
