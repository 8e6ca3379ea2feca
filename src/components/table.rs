//! Generic data table. Each list screen supplies a column descriptor list
//! and a row renderer; sorting, loading and empty states are handled here.

use yew::prelude::*;

use crate::list::{SortDirection, SortState};

#[derive(Clone, PartialEq)]
pub struct ColumnDef {
    pub header: &'static str,
    pub sort_key: Option<&'static str>,
}

impl ColumnDef {
    pub fn plain(header: &'static str) -> Self {
        ColumnDef {
            header,
            sort_key: None,
        }
    }

    pub fn sortable(header: &'static str, key: &'static str) -> Self {
        ColumnDef {
            header,
            sort_key: Some(key),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<T: PartialEq + Clone> {
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<T>,
    pub render_row: Callback<(usize, T), Html>,
    #[prop_or(false)]
    pub loading: bool,
    #[prop_or(AttrValue::Static("No data available."))]
    pub empty_message: AttrValue,
    #[prop_or_default]
    pub sort: Option<SortState>,
    #[prop_or_default]
    pub on_sort: Option<Callback<&'static str>>,
}

#[function_component(DataTable)]
pub fn data_table<T: PartialEq + Clone + 'static>(props: &DataTableProps<T>) -> Html {
    let span = props.columns.len().to_string();

    let header_cell = |column: &ColumnDef| match (column.sort_key, props.on_sort.clone()) {
        (Some(key), Some(on_sort)) => {
            let indicator = match props.sort {
                Some(sort) if sort.key == key => match sort.direction {
                    SortDirection::Ascending => " ▲",
                    SortDirection::Descending => " ▼",
                },
                _ => "",
            };
            html! {
                <th
                    class="px-6 py-4 font-bold cursor-pointer select-none"
                    onclick={Callback::from(move |_| on_sort.emit(key))}
                >
                    { column.header }{ indicator }
                </th>
            }
        }
        _ => html! { <th class="px-6 py-4 font-bold">{ column.header }</th> },
    };

    html! {
        <div class="overflow-x-auto rounded-2xl shadow-lg">
            <table class="w-full text-left bg-white border-collapse text-sm">
                <thead>
                    <tr class="bg-gradient-to-r from-[#f77062] to-[#fe5196] text-white text-[11px] uppercase tracking-widest">
                        { for props.columns.iter().map(header_cell) }
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 text-gray-700">
                    { if props.loading {
                        html! {
                            <tr><td colspan={span} class="px-6 py-10 text-center text-gray-400">{"Loading..."}</td></tr>
                        }
                    } else if props.rows.is_empty() {
                        html! {
                            <tr><td colspan={span} class="px-6 py-10 text-center text-gray-500">{ props.empty_message.clone() }</td></tr>
                        }
                    } else {
                        html! {
                            <>
                                { for props.rows.iter().cloned().enumerate().map(|(idx, row)| props.render_row.emit((idx, row))) }
                            </>
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
