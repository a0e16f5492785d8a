use yew::prelude::*;

use crate::data::content::{status_descriptor, Phase, ROADMAP};
use crate::i18n::{t, Key};
use crate::preferences::PreferencesContext;

#[derive(Properties, PartialEq)]
struct PhaseCardProps {
    index: usize,
    expanded: bool,
    on_toggle: Callback<usize>,
}

#[function_component(PhaseCard)]
fn phase_card(props: &PhaseCardProps) -> Html {
    let Some(phase): Option<&Phase> = ROADMAP.get(props.index) else {
        return html! {};
    };
    let status = status_descriptor(phase.status);

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_toggle.emit(index))
    };

    html! {
        <div class={classes!("roadmap-phase", props.expanded.then(|| "expanded"))}>
            <button class="roadmap-phase-header" {onclick} aria-expanded={props.expanded.to_string()}>
                <span class="roadmap-phase-number">{format!("Phase {}", phase.number)}</span>
                <span class="roadmap-phase-title">{phase.title}</span>
                <span class={status.badge_class}>{status.label}</span>
                <span class="roadmap-phase-target">{phase.target}</span>
            </button>
            if status.show_progress {
                <div class="roadmap-progress">
                    <div class="roadmap-progress-bar" style={format!("width: {}%;", phase.progress)}></div>
                    <span class="roadmap-progress-label">{format!("{}% complete", phase.progress)}</span>
                </div>
            }
            if props.expanded {
                <ul class="roadmap-milestones">
                    { for phase.milestones.iter().map(|milestone| html! {
                        <li class={status.milestone_class}>{*milestone}</li>
                    }) }
                </ul>
            }
        </div>
    }
}

#[function_component(Roadmap)]
pub fn roadmap() -> Html {
    let language = use_context::<PreferencesContext>()
        .map(|prefs| prefs.get().language)
        .unwrap_or_default();
    // Pre-launch phase starts open.
    let expanded = use_state(|| Some(1usize));

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |index: usize| {
            if *expanded == Some(index) {
                expanded.set(None);
            } else {
                expanded.set(Some(index));
            }
        })
    };

    html! {
        <section id="roadmap" class="roadmap-section">
            <h2 class="section-title">{t(language, Key::RoadmapTitle)}</h2>
            <div class="roadmap-timeline">
                { for (0..ROADMAP.len()).map(|index| html! {
                    <PhaseCard
                        key={index}
                        {index}
                        expanded={*expanded == Some(index)}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
