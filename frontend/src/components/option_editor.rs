use shared::constants::{MAX_OPTIONS, MAX_WEIGHT, MIN_WEIGHT};
use shared::editor::WheelEditor;
use shared::segment::Wheel;
use shared::WheelError;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::styles;

#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    Add(String),
    Remove(String),
    /// Removal after a spin; the option may already be gone.
    Exclude(String),
    Rename { id: String, label: String },
    SetWeight { id: String, weight: f64 },
    Move { from: usize, to: usize },
    Import(String),
    Shuffle,
    Sort,
    Clear,
}

/// Applies one edit and returns a short status line for the user.
pub fn apply_action(editor: &mut WheelEditor, action: EditAction) -> Result<Option<String>, WheelError> {
    match action {
        EditAction::Add(label) => {
            let added = editor.add_option(&label)?;
            Ok(Some(format!("Added \"{}\"", added.label)))
        }
        EditAction::Remove(id) => {
            let removed = editor.remove_option(&id)?;
            Ok(Some(format!("Removed \"{}\"", removed.label)))
        }
        EditAction::Exclude(id) => match editor.remove_option(&id) {
            Ok(removed) => Ok(Some(format!("Removed \"{}\"", removed.label))),
            Err(WheelError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        },
        EditAction::Rename { id, label } => editor.rename_option(&id, &label).map(|_| None),
        EditAction::SetWeight { id, weight } => editor.set_weight(&id, weight).map(|_| None),
        EditAction::Move { from, to } => editor.move_option(from, to).map(|_| None),
        EditAction::Import(text) => {
            let added = editor.import_text(&text);
            Ok(Some(format!("Imported {} option{}", added, if added == 1 { "" } else { "s" })))
        }
        EditAction::Shuffle => {
            editor.shuffle(&mut rand::thread_rng());
            Ok(None)
        }
        EditAction::Sort => {
            editor.sort_alphabetically();
            Ok(None)
        }
        EditAction::Clear => {
            editor.clear();
            Ok(Some("Cleared all options".to_string()))
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct OptionEditorProps {
    pub wheel: Wheel,
    pub on_action: Callback<EditAction>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(OptionEditor)]
pub fn option_editor(props: &OptionEditorProps) -> Html {
    let new_option = use_state(String::new);
    let import_text = use_state(String::new);

    let on_add = {
        let new_option = new_option.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if new_option.trim().is_empty() {
                return;
            }
            on_action.emit(EditAction::Add((*new_option).clone()));
            new_option.set(String::new());
        })
    };

    let on_import = {
        let import_text = import_text.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            on_action.emit(EditAction::Import((*import_text).clone()));
            import_text.set(String::new());
        })
    };

    let simple = |action: EditAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(action.clone()))
    };

    let count = props.wheel.len();
    let last = count.saturating_sub(1);

    html! {
        <div class={classes!(styles::CARD, "w-full", "space-y-4")}>
            <div class="flex items-center justify-between">
                <h2 class={styles::TEXT_H3}>{"Options"}</h2>
                <span class={styles::TEXT_SMALL}>{format!("{}/{}", count, MAX_OPTIONS)}</span>
            </div>

            <form onsubmit={on_add} class="flex gap-2">
                <input
                    type="text"
                    placeholder="Add an option"
                    value={(*new_option).clone()}
                    class={styles::INPUT}
                    disabled={props.disabled}
                    oninput={let new_option = new_option.clone(); move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        new_option.set(input.value());
                    }}
                />
                <button type="submit" class={styles::BUTTON_PRIMARY} disabled={props.disabled}>{"Add"}</button>
            </form>

            <ul class="space-y-2">
                { for props.wheel.segments.iter().enumerate().map(|(index, segment)| {
                    let id = segment.id.clone();
                    let on_rename = {
                        let id = id.clone();
                        let on_action = props.on_action.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            on_action.emit(EditAction::Rename { id: id.clone(), label: input.value() });
                        })
                    };
                    let on_weight = {
                        let id = id.clone();
                        let on_action = props.on_action.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            if let Ok(weight) = input.value().parse::<f64>() {
                                on_action.emit(EditAction::SetWeight { id: id.clone(), weight });
                            }
                        })
                    };
                    html! {
                        <li key={id.clone()} class="flex items-center gap-2">
                            <span class="w-4 h-4 rounded-full shrink-0" style={format!("background-color: {};", segment.color)}></span>
                            <input
                                type="text"
                                value={segment.label.clone()}
                                class={styles::INPUT}
                                disabled={props.disabled}
                                onchange={on_rename}
                            />
                            <input
                                type="number"
                                title="Weight"
                                min={MIN_WEIGHT.to_string()}
                                max={MAX_WEIGHT.to_string()}
                                value={segment.weight.map(|w| w.to_string()).unwrap_or_default()}
                                placeholder="1"
                                class={classes!(styles::INPUT, "w-20")}
                                disabled={props.disabled}
                                onchange={on_weight}
                            />
                            <button class={styles::BUTTON_ICON} disabled={props.disabled || index == 0}
                                onclick={simple(EditAction::Move { from: index, to: index.saturating_sub(1) })}>{"↑"}</button>
                            <button class={styles::BUTTON_ICON} disabled={props.disabled || index == last}
                                onclick={simple(EditAction::Move { from: index, to: (index + 1).min(last) })}>{"↓"}</button>
                            <button class={styles::BUTTON_ICON} disabled={props.disabled}
                                onclick={simple(EditAction::Remove(id))}>{"✕"}</button>
                        </li>
                    }
                })}
            </ul>

            <div class="flex flex-wrap gap-2">
                <button class={styles::BUTTON_SECONDARY} disabled={props.disabled || count < 2} onclick={simple(EditAction::Shuffle)}>{"Shuffle"}</button>
                <button class={styles::BUTTON_SECONDARY} disabled={props.disabled || count < 2} onclick={simple(EditAction::Sort)}>{"Sort A-Z"}</button>
                <button class={styles::BUTTON_DANGER} disabled={props.disabled || count == 0} onclick={simple(EditAction::Clear)}>{"Clear"}</button>
            </div>

            <div class="space-y-2">
                <label class={styles::TEXT_LABEL}>{"Paste options, one per line"}</label>
                <textarea
                    rows="4"
                    value={(*import_text).clone()}
                    class={styles::INPUT}
                    disabled={props.disabled}
                    oninput={let import_text = import_text.clone(); move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        import_text.set(input.value());
                    }}
                />
                <button class={styles::BUTTON_PRIMARY} disabled={props.disabled || import_text.trim().is_empty()} onclick={on_import}>{"Import"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> WheelEditor {
        WheelEditor::new(Wheel::from_labels("custom", "My Wheel", ["Red", "Blue"]))
    }

    #[test]
    fn test_add_reports_label() {
        let mut editor = editor();
        let status = apply_action(&mut editor, EditAction::Add("  Green ".to_string())).unwrap();
        assert_eq!(status.as_deref(), Some("Added \"Green\""));
        assert_eq!(editor.wheel().len(), 3);
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let mut editor = editor();
        let result = apply_action(&mut editor, EditAction::Add("red".to_string()));
        assert!(matches!(result, Err(WheelError::Validation(_))));
        assert_eq!(editor.wheel().len(), 2);
    }

    #[test]
    fn test_import_counts_new_options() {
        let mut editor = editor();
        let status = apply_action(&mut editor, EditAction::Import("Green\nYellow".to_string())).unwrap();
        assert_eq!(status.as_deref(), Some("Imported 2 options"));
    }

    #[test]
    fn test_remove_then_clear() {
        let mut editor = editor();
        let id = editor.wheel().segments[0].id.clone();
        apply_action(&mut editor, EditAction::Remove(id)).unwrap();
        assert_eq!(editor.wheel().len(), 1);
        apply_action(&mut editor, EditAction::Clear).unwrap();
        assert!(editor.wheel().is_empty());
    }

    #[test]
    fn test_exclude_ignores_option_removed_by_hand() {
        let mut editor = editor();
        let id = editor.wheel().segments[0].id.clone();
        apply_action(&mut editor, EditAction::Remove(id.clone())).unwrap();

        let status = apply_action(&mut editor, EditAction::Exclude(id.clone())).unwrap();
        assert_eq!(status, None);
        assert_eq!(editor.wheel().len(), 1);

        let result = apply_action(&mut editor, EditAction::Remove(id));
        assert!(matches!(result, Err(WheelError::NotFound(_))));
    }
}
