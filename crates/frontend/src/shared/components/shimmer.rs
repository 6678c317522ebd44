use leptos::prelude::*;

/// Placeholder table row shown while data is loading
#[component]
pub fn ShimmerRow(
    /// Number of cells
    columns: usize,
    /// How many rows to render (default: 1)
    #[prop(optional)]
    rows: Option<usize>,
) -> impl IntoView {
    (0..rows.unwrap_or(1))
        .map(|_| {
            view! {
                <tr class="table__row table__row--shimmer">
                    {(0..columns)
                        .map(|_| view! { <td class="table__cell"><div class="shimmer"></div></td> })
                        .collect_view()}
                </tr>
            }
        })
        .collect_view()
}
