use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub high_contrast: bool,
    pub on_increase_font: Callback<()>,
    pub on_reset_font: Callback<()>,
    pub on_toggle_contrast: Callback<()>,
}

/// Accessibility toolbar: font-scale controls and the high-contrast toggle.
#[function_component(SettingsControls)]
pub fn settings_controls(p: &Props) -> Html {
    let increase = {
        let cb = p.on_increase_font.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset = {
        let cb = p.on_reset_font.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle = {
        let cb = p.on_toggle_contrast.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="accessibility-controls" role="group" aria-label="Display settings">
            <button type="button" onclick={increase} aria-label="Increase font size">
                { "A+" }
            </button>
            <button type="button" onclick={reset} aria-label="Reset font size">
                { "A" }
            </button>
            <button
                type="button"
                onclick={toggle}
                aria-pressed={p.high_contrast.to_string()}
                aria-label="Toggle high contrast"
                data-testid="contrast-toggle"
            >
                { "Contrast" }
            </button>
        </div>
    }
}
