//! Control-panel widgets.
//!
//! Every widget is generic over the page's [`ControlSet`] and only ever
//! mutates it through an action, so the clamping and closed option lists of
//! the control model hold no matter which widget fires.

use breakdown_core::{Choice, ControlSet};
use leptos::prelude::*;
use tracing::warn;

/// Stepper with `-` / `+` buttons for a bounded number.
#[component]
pub fn Counter<C>(
    state: RwSignal<C>,
    label: &'static str,
    description: &'static str,
    /// Text shown between the buttons, e.g. `3` or `1.5rem`.
    read: fn(&C) -> String,
    decrement: C::Action,
    increment: C::Action,
) -> impl IntoView
where
    C: ControlSet,
{
    view! {
        <div class="control">
            <label>{label}</label>
            <p class="description">{description}</p>
            <div class="counter">
                <button
                    aria-label=format!("Decrease {}", label.to_lowercase())
                    on:click=move |_| {
                        dispatch(state, decrement);
                    }
                >
                    "-"
                </button>
                <span>{move || state.with(read)}</span>
                <button
                    aria-label=format!("Increase {}", label.to_lowercase())
                    on:click=move |_| {
                        dispatch(state, increment);
                    }
                >
                    "+"
                </button>
            </div>
        </div>
    }
}

/// Checkbox for a boolean control.
#[component]
pub fn Toggle<C>(
    state: RwSignal<C>,
    /// Element id, ties the checkbox to its label.
    id: &'static str,
    label: &'static str,
    description: &'static str,
    toggle_label: &'static str,
    read: fn(&C) -> bool,
    set: fn(bool) -> C::Action,
) -> impl IntoView
where
    C: ControlSet,
{
    view! {
        <div class="control">
            <label>{label}</label>
            <p class="description">{description}</p>
            <div class="toggle">
                <input
                    type="checkbox"
                    id=id
                    prop:checked=move || state.with(read)
                    on:change=move |ev| {
                        dispatch(state, set(event_target_checked(&ev)));
                    }
                />
                <label for=id>{toggle_label}</label>
            </div>
        </div>
    }
}

/// `<select>` over every option of a [`Choice`].
#[component]
pub fn ChoiceSelect<C, T>(
    state: RwSignal<C>,
    label: &'static str,
    description: &'static str,
    read: fn(&C) -> T,
    set: fn(T) -> C::Action,
) -> impl IntoView
where
    C: ControlSet,
    T: Choice,
{
    view! {
        <div class="control">
            <label>{label}</label>
            <p class="description">{description}</p>
            <select
                class="select"
                prop:value=move || state.with(read).value()
                on:change=move |ev| {
                    select_option(state, set, &event_target_value(&ev));
                }
            >
                {T::ALL
                    .iter()
                    .copied()
                    .map(|choice| {
                        view! {
                            <option
                                value=choice.value()
                                selected=move || state.with(read) == choice
                            >
                                {choice.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Restores the control set to its defaults.
#[component]
pub fn ResetButton<C>(state: RwSignal<C>, action: C::Action) -> impl IntoView
where
    C: ControlSet,
{
    view! {
        <div class="control">
            <button
                class="resetButton"
                on:click=move |_| {
                    dispatch(state, action);
                }
            >
                "Reset"
            </button>
        </div>
    }
}

/// Apply `action` to the page state. Returns whether anything changed.
fn dispatch<C: ControlSet>(state: RwSignal<C>, action: C::Action) -> bool {
    let mut changed = false;
    state.update(|controls| changed = controls.apply(action));
    changed
}

/// Apply the option a `<select>` reported. Values outside the option list
/// leave the state untouched.
fn select_option<C, T>(state: RwSignal<C>, set: fn(T) -> C::Action, raw: &str) -> bool
where
    C: ControlSet,
    T: Choice,
{
    match T::parse_option(raw) {
        Ok(choice) => dispatch(state, set(choice)),
        Err(err) => {
            warn!(%err, "ignoring select value");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakdown_core::{
        AutoFlow, FlexAction, FlexControls, FlexJustify, GridAction, GridControls, RowSizing,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn counter_actions_stop_at_the_bounds() {
        let state = RwSignal::new(FlexControls::default());
        while dispatch(state, FlexAction::IncrementItems) {}
        assert_eq!(state.with(|c| c.item_count()), 12);
        assert!(!dispatch(state, FlexAction::IncrementItems));

        while dispatch(state, FlexAction::DecrementGap) {}
        assert_eq!(state.with(|c| c.gap.rem()), 0.0);
    }

    #[test]
    fn reset_button_action_restores_defaults() {
        let state = RwSignal::new(GridControls::default());
        dispatch(state, GridAction::IncrementColumns);
        dispatch(state, GridAction::SetRows(RowSizing::Fixed));
        assert!(dispatch(state, GridAction::Reset));
        assert_eq!(state.get(), GridControls::default());
    }

    #[test]
    fn select_applies_known_options() {
        let state = RwSignal::new(GridControls::default());
        assert!(select_option(state, GridAction::SetAutoFlow, "column dense"));
        assert_eq!(state.with(|c| c.auto_flow), AutoFlow::ColumnDense);
    }

    #[test]
    fn select_ignores_unknown_options() {
        let state = RwSignal::new(FlexControls::default());
        assert!(!select_option(state, FlexAction::SetJustifyContent, "middle"));
        assert!(!select_option(state, FlexAction::SetJustifyContent, ""));
        assert_eq!(state.get(), FlexControls::default());
    }

    #[cfg(feature = "ssr")]
    mod rendered {
        use super::*;
        use leptos::tachys::view::RenderHtml;
        use pretty_assertions::assert_eq;

        /// `value` attributes of every `<option>`, in document order.
        fn option_values(html: &str) -> Vec<&str> {
            html.split("<option")
                .skip(1)
                .filter_map(|tag| {
                    let rest = &tag[tag.find("value=\"")? + 7..];
                    Some(&rest[..rest.find('"')?])
                })
                .collect()
        }

        fn assert_options_round_trip<T: Choice + std::fmt::Debug>(html: &str) {
            let values = option_values(html);
            assert_eq!(values.len(), T::ALL.len(), "{html}");
            for (raw, expected) in values.iter().zip(T::ALL) {
                assert_eq!(T::parse_option(raw), Ok(*expected));
            }
        }

        #[test]
        fn flex_select_options_parse_back() {
            let state = RwSignal::new(FlexControls::default());
            let html = view! {
                <ChoiceSelect
                    state=state
                    label="Justify Content"
                    description="Align items along the main axis"
                    read=|c: &FlexControls| c.justify_content
                    set=FlexAction::SetJustifyContent
                />
            }
            .to_html();
            assert_options_round_trip::<FlexJustify>(&html);
        }

        #[test]
        fn grid_select_options_parse_back() {
            let state = RwSignal::new(GridControls::default());
            let html = view! {
                <ChoiceSelect
                    state=state
                    label="Auto Flow"
                    description="How auto-placed items flow into the grid"
                    read=|c: &GridControls| c.auto_flow
                    set=GridAction::SetAutoFlow
                />
            }
            .to_html();
            assert_options_round_trip::<AutoFlow>(&html);
        }

        #[test]
        fn current_option_is_selected() {
            let state = RwSignal::new(FlexControls::default());
            state.update(|c| {
                c.apply(FlexAction::SetJustifyContent(FlexJustify::SpaceEvenly));
            });
            let html = view! {
                <ChoiceSelect
                    state=state
                    label="Justify Content"
                    description=""
                    read=|c: &FlexControls| c.justify_content
                    set=FlexAction::SetJustifyContent
                />
            }
            .to_html();
            let selected: Vec<&str> = html
                .split("<option")
                .skip(1)
                .filter(|tag| tag[..tag.find('>').unwrap_or(tag.len())].contains("selected"))
                .collect();
            assert_eq!(selected.len(), 1, "{html}");
            assert!(selected[0].contains("value=\"space-evenly\""));
        }

        #[test]
        fn counter_shows_the_current_value() {
            let state = RwSignal::new(GridControls::default());
            let html = view! {
                <Counter
                    state=state
                    label="Columns"
                    description="Number of columns in the grid"
                    read=|c: &GridControls| c.columns.value().to_string()
                    decrement=GridAction::DecrementColumns
                    increment=GridAction::IncrementColumns
                />
            }
            .to_html();
            assert!(html.contains("<span>3<"), "{html}");
            assert!(html.contains("aria-label=\"Increase columns\""));
        }
    }
}
