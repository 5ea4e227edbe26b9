use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use crate::api::{copy_to_clipboard, post_decode};
use crate::busy::BusyState;
use crate::utils::{COPY_FAILED_MSG, MISSING_FILE_MSG};

#[component]
pub fn DecodeSection(overlay: RwSignal<bool>) -> impl IntoView {
    let (error, set_error) = signal(String::new());
    let (output, set_output) = signal(String::new());
    let busy = BusyState::new(overlay);
    let disabled = busy.disabled();

    let form_ref = NodeRef::<html::Form>::new();
    let file_ref = NodeRef::<html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());
        set_output.set(String::new());

        let has_file = file_ref
            .get_untracked()
            .and_then(|input| input.files())
            .is_some_and(|files| files.length() > 0);
        if !has_file {
            set_error.set(MISSING_FILE_MSG.to_string());
            return;
        }

        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        let payload = match FormData::new_with_form(&form) {
            Ok(payload) => payload,
            Err(err) => {
                leptos::logging::error!("Failed to snapshot decode form: {:?}", err);
                return;
            }
        };

        let guard = busy.enter();
        spawn_local(async move {
            let _guard = guard;
            match post_decode(&payload).await {
                Ok(text) => set_output.set(text),
                Err(err) => set_error.set(err.message().to_string()),
            }
        });
    };

    // Independent of busy state; never touches the output text on failure.
    let on_copy = move |_| {
        let text = output.get_untracked();
        spawn_local(async move {
            if let Err(err) = copy_to_clipboard(&text).await {
                leptos::logging::warn!("Clipboard write failed: {err}");
                set_error.set(COPY_FAILED_MSG.to_string());
            }
        });
    };

    view! {
        <section class="card">
            <div class="card-header">
                <div>
                    <p class="eyebrow">"Decode"</p>
                    <h2>"Recover a message from audio"</h2>
                </div>
            </div>
            <form id="decode-form" node_ref=form_ref on:submit=on_submit>
                <label for="wav-input">"WAV file"</label>
                <input
                    id="wav-input"
                    name="file"
                    type="file"
                    accept=".wav,audio/wav"
                    node_ref=file_ref
                    disabled=move || disabled.get()
                />
                <details class="advanced">
                    <summary>"Signal parameters (must match the encode run)"</summary>
                    <label>
                        "Baud"
                        <input type="number" name="baud" value="90" step="any" min="1"
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
                <button type="submit" disabled=move || disabled.get()>"Decode"</button>
            </form>
            <p id="decode-error" class="error-msg">{move || error.get()}</p>
            <label for="decode-output">"Recovered text"</label>
            <textarea
                id="decode-output"
                rows="4"
                readonly=true
                prop:value=move || output.get()
            ></textarea>
            <button id="copy-btn" class="ghost compact" on:click=on_copy>"Copy"</button>
        </section>
    }
}
