//! Customers page: a read-only account table.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CustomerStatus {
    Active,
    Trial,
    Churned,
}

impl CustomerStatus {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Trial => "Trial",
            Self::Churned => "Churned",
        }
    }

    pub(crate) fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "badge badge--active",
            Self::Trial => "badge badge--trial",
            Self::Churned => "badge badge--churned",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Customer {
    pub name: &'static str,
    pub company: &'static str,
    pub email: &'static str,
    pub status: CustomerStatus,
}

pub(crate) const CUSTOMERS: &[Customer] = &[
    Customer {
        name: "Grace Hopper",
        company: "Compiler Works",
        email: "grace@compilerworks.test",
        status: CustomerStatus::Active,
    },
    Customer { name: "Alan Turing", company: "Enigma Labs", email: "alan@enigma.test", status: CustomerStatus::Trial },
    Customer {
        name: "Ada Lovelace",
        company: "Analytical Engines",
        email: "ada@engines.test",
        status: CustomerStatus::Active,
    },
    Customer { name: "Claude Shannon", company: "Bitstream", email: "shannon@bitstream.test", status: CustomerStatus::Churned },
    Customer { name: "Edsger Dijkstra", company: "Shortest Path", email: "edsger@path.test", status: CustomerStatus::Trial },
];

/// Up to two uppercase initials for the avatar chip.
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|word| word.chars().next()).take(2).flat_map(char::to_uppercase).collect()
}

/// Number of customers with the given status.
pub(crate) fn count_with_status(customers: &[Customer], status: CustomerStatus) -> usize {
    customers.iter().filter(|c| c.status == status).count()
}

#[component]
pub fn CustomersPage() -> impl IntoView {
    let active = count_with_status(CUSTOMERS, CustomerStatus::Active);

    view! {
        <section class="page page--customers">
            <h1>"Customers"</h1>
            <p class="page__lead">{format!("{active} of {} accounts active", CUSTOMERS.len())}</p>
            <table class="customers-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Company"</th>
                        <th>"Email"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {CUSTOMERS
                        .iter()
                        .map(|customer| {
                            view! {
                                <tr>
                                    <td>
                                        <span class="avatar">{initials(customer.name)}</span>
                                        {customer.name}
                                    </td>
                                    <td>{customer.company}</td>
                                    <td>{customer.email}</td>
                                    <td>
                                        <span class=customer.status.badge_class()>{customer.status.label()}</span>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
