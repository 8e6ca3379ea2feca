use yew::prelude::*;

/// Page numbers shown around the current page (two on each side).
pub fn page_window(current: u32, total: u32) -> Vec<u32> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let start = current.saturating_sub(2).max(1);
    let end = (current + 2).min(total);
    (start..=end).collect()
}

/// Whether the first-page shortcut renders, and whether a gap marker sits
/// after it. The marker only appears when a page number is actually skipped
/// between the shortcut and the window.
pub fn leading_shortcut(current: u32) -> (bool, bool) {
    let start = current.saturating_sub(2).max(1);
    (start > 1, start > 2)
}

pub fn trailing_shortcut(current: u32, total: u32) -> (bool, bool) {
    let end = (current + 2).min(total);
    (end < total, end + 1 < total)
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: u32,
    pub total_pages: u32,
    pub on_change: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total = props.total_pages.max(1);
    let current = props.current_page.clamp(1, total);

    let go = |page: u32| {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(page))
    };

    html! {
        <div class="p-4 flex items-center justify-between text-gray-500 w-full">
            <button
                disabled={current == 1}
                onclick={go(current.saturating_sub(1).max(1))}
                class="py-2 px-4 rounded-md bg-slate-200 text-xs font-semibold disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {"Prev"}
            </button>

            <div class="flex items-center gap-2 text-sm">
                { {
                    let (show_first, show_gap) = leading_shortcut(current);
                    if show_first {
                        html! {
                            <>
                                <button onclick={go(1)} class="px-2 rounded-sm">{"1"}</button>
                                { if show_gap { html! { <span>{"..."}</span> } } else { html! {} } }
                            </>
                        }
                    } else {
                        html! {}
                    }
                } }

                { for page_window(current, total).into_iter().map(|page| {
                    let class = if page == current {
                        "px-2 rounded-sm bg-[#fe5196] text-white"
                    } else {
                        "px-2 rounded-sm"
                    };
                    html! {
                        <button key={page} onclick={go(page)} class={class}>{ page }</button>
                    }
                }) }

                { {
                    let (show_last, show_gap) = trailing_shortcut(current, total);
                    if show_last {
                        html! {
                            <>
                                { if show_gap { html! { <span>{"..."}</span> } } else { html! {} } }
                                <button onclick={go(total)} class="px-2 rounded-sm">{ total }</button>
                            </>
                        }
                    } else {
                        html! {}
                    }
                } }
            </div>

            <button
                disabled={current == total}
                onclick={go((current + 1).min(total))}
                class="py-2 px-4 rounded-md bg-slate-200 text-xs font-semibold disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {"Next"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_centers_on_current_page() {
        assert_eq!(page_window(5, 9), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_clamps_at_edges() {
        assert_eq!(page_window(1, 9), vec![1, 2, 3]);
        assert_eq!(page_window(9, 9), vec![7, 8, 9]);
        assert_eq!(page_window(1, 1), vec![1]);
    }

    #[test]
    fn window_tolerates_out_of_range_input() {
        assert_eq!(page_window(12, 3), vec![1, 2, 3]);
        assert_eq!(page_window(0, 0), vec![1]);
    }

    #[test]
    fn first_page_shortcut_only_marks_real_gaps() {
        // window already reaches page 1
        assert_eq!(leading_shortcut(3), (false, false));
        // window starts at 2, shortcut adjoins it with no gap
        assert_eq!(leading_shortcut(4), (true, false));
        // page 2 is skipped
        assert_eq!(leading_shortcut(5), (true, true));
    }

    #[test]
    fn last_page_shortcut_only_marks_real_gaps() {
        assert_eq!(trailing_shortcut(7, 9), (false, false));
        assert_eq!(trailing_shortcut(6, 9), (true, false));
        assert_eq!(trailing_shortcut(5, 9), (true, true));
    }
}
