use chrono::{NaiveDate, TimeZone, Utc};
use dioxus::prelude::*;
use shared_types::{BillStatus, MemberStatus, NewBill, NewMember};

use crate::fallback_data::fallback_packages;

/// Modal form for registering a member.
#[component]
pub fn AddMemberDialog(open: Signal<bool>, on_submit: EventHandler<NewMember>) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut package_id = use_signal(|| "pkg-1".to_string());

    if !open() {
        return rsx! {};
    }

    let mut reset = move || {
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        address.set(String::new());
        package_id.set("pkg-1".to_string());
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(NewMember {
            name: name(),
            email: email(),
            phone: phone(),
            address: address(),
            join_date: Utc::now(),
            package_id: package_id(),
            status: MemberStatus::Active,
        });
        reset();
        open.set(false);
    };

    rsx! {
        div { class: "dialog-overlay", onclick: move |_| open.set(false),
            div { class: "dialog", onclick: move |evt| evt.stop_propagation(),
                h3 { class: "dialog-title", "Add Member" }
                form { onsubmit: handle_submit,
                    div { class: "form-field",
                        label { "Full Name" }
                        input {
                            value: "{name}",
                            required: true,
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            required: true,
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Phone" }
                        input {
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Address" }
                        input {
                            value: "{address}",
                            oninput: move |e| address.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Package" }
                        select {
                            value: "{package_id}",
                            onchange: move |e| package_id.set(e.value()),
                            for pkg in fallback_packages() {
                                option { value: "{pkg.id}", "{pkg.name}" }
                            }
                        }
                    }
                    div { class: "dialog-actions",
                        button {
                            r#type: "button",
                            class: "button",
                            onclick: move |_| open.set(false),
                            "Cancel"
                        }
                        button { r#type: "submit", class: "button button-primary", "Add Member" }
                    }
                }
            }
        }
    }
}

/// Modal form for creating a bill. Selecting a package fills the amount from
/// its price; the due date is entered as `YYYY-MM-DD`.
#[component]
pub fn CreateBillDialog(open: Signal<bool>, on_submit: EventHandler<NewBill>) -> Element {
    let mut member_id = use_signal(String::new);
    let mut member_name = use_signal(String::new);
    let mut package_id = use_signal(|| "pkg-1".to_string());
    let mut due_date = use_signal(String::new);
    let mut status = use_signal(|| BillStatus::Pending);
    let mut date_error = use_signal(|| false);

    if !open() {
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Ok(due) = NaiveDate::parse_from_str(&due_date(), "%Y-%m-%d") else {
            date_error.set(true);
            return;
        };
        date_error.set(false);

        let packages = fallback_packages();
        let package = packages.iter().find(|p| p.id == package_id());
        let (package_name, amount) = match package {
            Some(p) => (p.name.clone(), p.price),
            None => (String::new(), 0),
        };

        on_submit.call(NewBill {
            member_id: member_id(),
            member_name: member_name(),
            package_id: package_id(),
            package_name,
            amount,
            paid_date: Utc::now(),
            due_date: Utc.from_utc_datetime(&due.and_hms_opt(0, 0, 0).unwrap_or_default()),
            status: status(),
        });

        member_id.set(String::new());
        member_name.set(String::new());
        due_date.set(String::new());
        open.set(false);
    };

    rsx! {
        div { class: "dialog-overlay", onclick: move |_| open.set(false),
            div { class: "dialog", onclick: move |evt| evt.stop_propagation(),
                h3 { class: "dialog-title", "Create Bill" }
                form { onsubmit: handle_submit,
                    div { class: "form-field",
                        label { "Member ID" }
                        input {
                            value: "{member_id}",
                            required: true,
                            oninput: move |e| member_id.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Member Name" }
                        input {
                            value: "{member_name}",
                            required: true,
                            oninput: move |e| member_name.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Package" }
                        select {
                            value: "{package_id}",
                            onchange: move |e| package_id.set(e.value()),
                            for pkg in fallback_packages() {
                                option { value: "{pkg.id}", "{pkg.name} ({pkg.duration_months} mo) ₹{pkg.price}" }
                            }
                        }
                    }
                    div { class: "form-field",
                        label { "Due Date" }
                        input {
                            placeholder: "YYYY-MM-DD",
                            value: "{due_date}",
                            required: true,
                            oninput: move |e| due_date.set(e.value()),
                        }
                        if date_error() {
                            p { class: "field-error", "Enter the due date as YYYY-MM-DD." }
                        }
                    }
                    div { class: "form-field",
                        label { "Status" }
                        select {
                            value: "{status().as_str()}",
                            onchange: move |e| {
                                status.set(match e.value().as_str() {
                                    "paid" => BillStatus::Paid,
                                    "overdue" => BillStatus::Overdue,
                                    _ => BillStatus::Pending,
                                });
                            },
                            option { value: "pending", "Pending" }
                            option { value: "paid", "Paid" }
                            option { value: "overdue", "Overdue" }
                        }
                    }
                    div { class: "dialog-actions",
                        button {
                            r#type: "button",
                            class: "button",
                            onclick: move |_| open.set(false),
                            "Cancel"
                        }
                        button { r#type: "submit", class: "button button-primary", "Create Bill" }
                    }
                }
            }
        }
    }
}
