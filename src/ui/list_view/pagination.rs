/// One button of a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    Ellipsis,
}

/// Slots used by the ellipsis layouts; smaller button counts fall back to it.
const MIN_WINDOW: u32 = 5;

/// Page buttons to render for `page` out of `total_pages`.
///
/// Up to `max_buttons` pages (never fewer than five) are listed in full.
/// Beyond that the first and last page are always shown with the current
/// neighbourhood in between.
pub fn page_window(page: u32, total_pages: u32, max_buttons: u32) -> Vec<PageSlot> {
    if total_pages == 0 {
        return Vec::new();
    }

    // From here on total_pages >= 6, so every listed page is distinct and in range.
    if total_pages <= max_buttons.max(MIN_WINDOW) {
        return (1..=total_pages).map(PageSlot::Page).collect();
    }

    let page = page.clamp(1, total_pages);
    let mut slots = vec![PageSlot::Page(1)];
    if page <= 3 {
        slots.extend([PageSlot::Page(2), PageSlot::Page(3), PageSlot::Ellipsis]);
    } else if page >= total_pages - 2 {
        slots.extend([
            PageSlot::Ellipsis,
            PageSlot::Page(total_pages - 2),
            PageSlot::Page(total_pages - 1),
        ]);
    } else {
        slots.extend([PageSlot::Ellipsis, PageSlot::Page(page), PageSlot::Ellipsis]);
    }
    slots.push(PageSlot::Page(total_pages));
    slots
}

/// Render a window as text, bracketing the current page: `1 [2] 3 … 9`.
pub fn render_window(slots: &[PageSlot], current: u32) -> String {
    slots
        .iter()
        .map(|slot| match slot {
            PageSlot::Page(p) if *p == current => format!("[{}]", p),
            PageSlot::Page(p) => p.to_string(),
            PageSlot::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::PageSlot::{Ellipsis, Page};
    use super::*;

    #[test]
    fn no_pages_no_buttons() {
        assert!(page_window(1, 0, 5).is_empty());
    }

    #[test]
    fn short_lists_show_every_page() {
        assert_eq!(page_window(2, 4, 5), vec![Page(1), Page(2), Page(3), Page(4)]);
    }

    #[test]
    fn near_start() {
        assert_eq!(
            page_window(2, 10, 5),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn near_end() {
        assert_eq!(
            page_window(9, 10, 5),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn middle() {
        assert_eq!(
            page_window(5, 10, 5),
            vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn small_button_counts_stay_in_range() {
        assert_eq!(page_window(1, 2, 1), vec![Page(1), Page(2)]);
        assert_eq!(page_window(3, 3, 2), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_window(4, 9, 3),
            vec![Page(1), Ellipsis, Page(4), Ellipsis, Page(9)]
        );

        for max_buttons in 1..=3 {
            for total in 1..=12 {
                for page in 1..=total {
                    let pages: Vec<u32> = page_window(page, total, max_buttons)
                        .into_iter()
                        .filter_map(|slot| match slot {
                            Page(p) => Some(p),
                            Ellipsis => None,
                        })
                        .collect();
                    assert!(pages.iter().all(|p| (1..=total).contains(p)), "{pages:?}");
                    assert!(pages.windows(2).all(|w| w[0] < w[1]), "{pages:?}");
                    assert!(pages.contains(&page));
                }
            }
        }
    }

    #[test]
    fn renders_current_page_in_brackets() {
        let slots = page_window(5, 10, 5);
        assert_eq!(render_window(&slots, 5), "1 … [5] … 10");
    }
}
