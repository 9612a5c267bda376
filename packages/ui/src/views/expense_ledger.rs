use api::forms::ExpenseForm;
use api::{ApiError, Expense, ExpenseType, FieldErrors, ListQuery, ResourceList};
use dioxus::prelude::*;

use crate::icons::{FaPlus, FaTrash};
use crate::views::{ConfirmDialog, ModalOverlay};
use crate::{error_lines, format, use_api, use_config, ErrorBanner, FieldError, Icon, Loading};

/// Expense table of one car with add and delete.
///
/// Created rows are prepended and deleted rows spliced out locally; the total
/// is the sum of the rows currently shown. A row created while an older page
/// is open, or after a failed load, sends the ledger back to a fresh page 1.
/// `on_changed` fires after every successful add or delete.
#[component]
pub fn ExpenseLedger(car_uid: String, on_changed: EventHandler<()>) -> Element {
    let mut uid_signal = use_signal(|| car_uid.clone());
    if *uid_signal.peek() != car_uid {
        uid_signal.set(car_uid.clone());
    }

    let api = use_api();
    let delete_api = api.clone();
    let config = use_config();
    let mut expenses = use_signal(ResourceList::<Expense>::new);
    let mut page = use_signal(|| 1u32);
    let mut show_add = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Expense>::None);
    let mut action_error = use_signal(|| Option::<ApiError>::None);

    let mut loader = use_resource(move || {
        let api = api.clone();
        let uid = uid_signal();
        let query = ListQuery::new(config.lists.expenses_page_size, "created_at").with_page(page());
        async move {
            expenses.write().begin_load(query.page);
            let result = api.car_expenses(&uid, &query).await;
            expenses.write().finish_load(result);
        }
    });

    let handle_created = move |expense: Expense| {
        show_add.set(false);
        let inserted = expenses.write().prepend(expense);
        if !inserted {
            if page() != 1 {
                page.set(1);
            } else {
                loader.restart();
            }
        }
        on_changed.call(());
    };

    let confirm_delete = move |_| {
        let Some(target) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        action_error.set(None);
        let api = delete_api.clone();
        let uid = uid_signal();
        spawn(async move {
            match api.delete_expense(&uid, &target.uid).await {
                Ok(()) => {
                    expenses.write().remove(&target.uid);
                    on_changed.call(());
                }
                Err(e) => action_error.set(Some(e)),
            }
        });
    };

    let list = expenses.read();
    let total = format::money(list.sum_by(|e| e.exp_summ));
    let has_prev = list.has_prev();
    let has_next = list.has_next();
    let current = list.page();
    let rows: Vec<Expense> = list.items().to_vec();

    let table = if let Some(message) = list.error() {
        let lines: Vec<String> = message.lines().map(str::to_string).collect();
        rsx! { ErrorBanner { lines } }
    } else if list.is_loading() && rows.is_empty() {
        rsx! { Loading {} }
    } else if list.is_empty() {
        rsx! { p { class: "empty-state", "No expenses recorded." } }
    } else {
        rsx! {
            table {
                class: "table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Category" }
                        th { "Name" }
                        th { class: "text-right", "Amount" }
                        th { "Added by" }
                        th {}
                    }
                }
                tbody {
                    for expense in rows {
                        ExpenseRow {
                            key: "{expense.uid}",
                            expense: expense.clone(),
                            on_delete: move |e: Expense| pending_delete.set(Some(e)),
                        }
                    }
                }
                tfoot {
                    tr {
                        td { colspan: 3, "Total" }
                        td { class: "text-right font-semibold", "{total}" }
                        td { colspan: 2 }
                    }
                }
            }
        }
    };
    drop(list);

    rsx! {
        section {
            class: "ledger",
            div {
                class: "view-header",
                h2 { class: "section-title", "Expenses" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_add.set(true),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    span { "Add expense" }
                }
            }

            ErrorBanner { lines: error_lines(&action_error()) }

            {table}

            if has_prev || has_next {
                div {
                    class: "pager",
                    button {
                        class: "btn btn-secondary",
                        disabled: !has_prev,
                        onclick: move |_| page.set(current.saturating_sub(1).max(1)),
                        "Newer"
                    }
                    button {
                        class: "btn btn-secondary",
                        disabled: !has_next,
                        onclick: move |_| page.set(current + 1),
                        "Older"
                    }
                }
            }

            if show_add() {
                NewExpenseDialog {
                    car_uid: uid_signal(),
                    on_created: handle_created,
                    on_close: move |_| show_add.set(false),
                }
            }

            if let Some(target) = pending_delete() {
                ConfirmDialog {
                    message: format!(
                        "Delete \"{}\" ({})?",
                        target.name,
                        format::money(target.exp_summ)
                    ),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn ExpenseRow(expense: Expense, on_delete: EventHandler<Expense>) -> Element {
    let date = expense.created_date().unwrap_or("-").to_string();
    let category = expense.kind.label();
    let name = expense.name.clone();
    let amount = format::money(expense.exp_summ);
    let author = expense.author_label().to_string();

    rsx! {
        tr {
            td { "{date}" }
            td { "{category}" }
            td { "{name}" }
            td { class: "text-right", "{amount}" }
            td { class: "text-neutral-500", "{author}" }
            td {
                button {
                    class: "icon-btn",
                    title: "Delete",
                    onclick: move |_| on_delete.call(expense.clone()),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                }
            }
        }
    }
}

/// Modal form for a new expense. Nothing is sent until every field is valid.
#[component]
fn NewExpenseDialog(
    car_uid: String,
    on_created: EventHandler<Expense>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut form = use_signal(ExpenseForm::default);
    let mut field_errors = use_signal(FieldErrors::new);
    let mut error = use_signal(|| Option::<ApiError>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let expense = match form().validate() {
            Ok(expense) => expense,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());

        let api = api.clone();
        let car_uid = car_uid.clone();
        spawn(async move {
            saving.set(true);
            match api.create_expense(&car_uid, &expense).await {
                Ok(created) => on_created.call(created),
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e));
                }
            }
        });
    };

    let selected = form().kind.map(|k| k.as_wire()).unwrap_or("");

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            h3 { class: "section-title mb-3", "New expense" }
            form {
                onsubmit: handle_submit,
                novalidate: true,
                class: "flex flex-col gap-2",

                ErrorBanner { lines: error_lines(&error()) }

                select {
                    class: "input",
                    value: selected,
                    onchange: move |evt: FormEvent| {
                        form.write().kind = ExpenseType::from_wire(&evt.value());
                    },
                    option { value: "", selected: selected.is_empty(), "Category..." }
                    for kind in ExpenseType::ALL {
                        option {
                            value: kind.as_wire(),
                            selected: kind.as_wire() == selected,
                            {kind.label()}
                        }
                    }
                }
                FieldError { errors: field_errors(), field: "kind" }

                input {
                    class: "input",
                    placeholder: "What was it?",
                    value: form().name,
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                FieldError { errors: field_errors(), field: "name" }

                input {
                    class: "input",
                    inputmode: "numeric",
                    placeholder: "Amount",
                    value: form().amount,
                    oninput: move |evt: FormEvent| form.write().amount = evt.value(),
                }
                FieldError { errors: field_errors(), field: "amount" }

                div {
                    class: "flex justify-end gap-2 mt-2",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Add" }
                    }
                }
            }
        }
    }
}
