use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use crate::api::{post_encode, save_artifact};
use crate::busy::BusyState;
use crate::utils::InputMode;

#[component]
pub fn EncodeSection(overlay: RwSignal<bool>) -> impl IntoView {
    let (error, set_error) = signal(String::new());
    let busy = BusyState::new(overlay);
    let disabled = busy.disabled();

    let form_ref = NodeRef::<html::Form>::new();
    let text_ref = NodeRef::<html::Textarea>::new();
    let file_ref = NodeRef::<html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // The controller owns dispatch; the browser never posts this form.
        ev.prevent_default();
        set_error.set(String::new());

        let text = text_ref
            .get_untracked()
            .map(|area| area.value())
            .unwrap_or_default();
        let has_file = file_ref
            .get_untracked()
            .and_then(|input| input.files())
            .is_some_and(|files| files.length() > 0);

        let mode = InputMode::classify(&text, has_file);
        if let Some(msg) = mode.rejection() {
            set_error.set(msg.to_string());
            return;
        }

        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        let payload = match FormData::new_with_form(&form) {
            Ok(payload) => payload,
            Err(err) => {
                leptos::logging::error!("Failed to snapshot encode form: {:?}", err);
                return;
            }
        };
        if let Some(field) = mode.unused_field() {
            payload.delete(field);
        }

        let guard = busy.enter();
        spawn_local(async move {
            let _guard = guard;
            match post_encode(&payload).await {
                Ok(artifact) => {
                    if let Err(err) = save_artifact(&artifact) {
                        leptos::logging::error!("Download trigger failed: {:?}", err);
                    }
                }
                Err(err) => set_error.set(err.message().to_string()),
            }
        });
    };

    view! {
        <section class="card">
            <div class="card-header">
                <div>
                    <p class="eyebrow">"Encode"</p>
                    <h2>"Hide a message in audio"</h2>
                </div>
            </div>
            <form id="encode-form" node_ref=form_ref on:submit=on_submit>
                <label for="text-input">"Message"</label>
                <textarea
                    id="text-input"
                    name="text"
                    rows="4"
                    placeholder="Text to embed"
                    node_ref=text_ref
                    disabled=move || disabled.get()
                ></textarea>
                <label for="file-input">"Or upload a file instead"</label>
                <input
                    id="file-input"
                    name="file"
                    type="file"
                    node_ref=file_ref
                    disabled=move || disabled.get()
                />
                <details class="advanced">
                    <summary>"Signal parameters"</summary>
                    <label>
                        "Sample rate"
                        <input type="number" name="samplerate" value="48000" min="8000"
                            disabled=move || disabled.get() />
                    </label>
                    <label>
                        "Baud"
                        <input type="number" name="baud" value="90" step="any" min="1"
                            disabled=move || disabled.get() />
                    </label>
                    <label>
                        "Amplitude"
                        <input type="number" name="amp" value="0.06" step="0.01" min="0" max="1"
                            disabled=move || disabled.get() />
                    </label>
                    <label>
                        "Mode"
                        <select name="mode" disabled=move || disabled.get()>
                            <option value="dense">"dense"</option>
                            <option value="sparse">"sparse"</option>
                        </select>
                    </label>
                    <label>
                        "Preamble (s)"
                        <input type="number" name="preamble_s" value="0.8" step="0.1" min="0"
                            disabled=move || disabled.get() />
                    </label>
                    <label>
                        "Interleave depth"
                        <input type="number" name="interleave_depth" value="4" min="1"
                            disabled=move || disabled.get() />
                    </label>
                    <label>
                        "Repeats"
                        <input type="number" name="repeats" value="2" min="1"
                            disabled=move || disabled.get() />
                    </label>
                </details>
                <button type="submit" disabled=move || disabled.get()>"Encode to WAV"</button>
            </form>
            <p id="encode-error" class="error-msg">{move || error.get()}</p>
        </section>
    }
}
