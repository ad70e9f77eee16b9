#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::*;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_clones_share_value() {
        let a = signal(String::new());
        let b = a.clone();
        b.set("x".into());
        a.update(|v| v.push('y'));
        assert_eq!(b.get(), "xy");
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        scope.dispose();
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_current_scope_inside_run() {
        assert!(current_scope().is_none());
        let scope = Scope::new();
        let hits = Rc::new(RefCell::new(0));
        scope.run(|| {
            let hits = hits.clone();
            current_scope()
                .expect("scope is active")
                .add_disposer(move || *hits.borrow_mut() += 1);
        });
        assert!(current_scope().is_none());
        scope.dispose();
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_scheduler_counts_and_flattens_frames() {
        let mut sched = Scheduler::new();
        let flatten = |v: View| (v, Vec::new(), Vec::new());
        let mut seen = Vec::new();
        for _ in 0..3 {
            let frame = sched.repose(
                |s: &mut Scheduler| Text(format!("frame {}", s.frames())),
                flatten,
            );
            assert!(frame.errors.is_empty());
            seen.extend(frame.root.texts());
        }
        assert_eq!(seen, vec!["frame 1", "frame 2", "frame 3"]);
        assert_eq!(sched.frames(), 3);
    }

    #[test]
    fn test_color_from_hex_and_argb() {
        assert_eq!(Color::from_hex("#FF5733"), Color(255, 87, 51, 255));
        assert_eq!(Color::from_hex("#FF5733AA"), Color(255, 87, 51, 170));
        assert_eq!(Color::from_argb(0xFFBBDEFB), Color::from_hex("#BBDEFB"));
        assert_eq!(Color::from_argb(0xFFB76E22), Color(0xB7, 0x6E, 0x22, 255));
    }

    #[test]
    fn test_color_from_hex_rejects_garbage() {
        assert_eq!(Color::from_hex("zzzzzz"), Color::BLACK);
        assert_eq!(Color::from_hex("#12345"), Color::BLACK);
        // six bytes, not six hex digits
        assert_eq!(Color::from_hex("ééé"), Color::BLACK);
        assert_eq!(Color::from_hex("#aébbcc"), Color::BLACK);
        assert_eq!(Color::from_hex("#112233é"), Color::BLACK);
    }

    #[test]
    fn test_theme_local_nesting() {
        let dark = Theme {
            background: Color::BLACK,
            ..Theme::default()
        };
        assert_eq!(theme(), Theme::default());
        with_theme(dark, || {
            assert_eq!(theme().background, Color::BLACK);
            with_theme(Theme::default(), || {
                assert_eq!(theme(), Theme::default());
            });
            assert_eq!(theme().background, Color::BLACK);
        });
        assert_eq!(theme(), Theme::default());
    }

    #[test]
    fn test_annotated_string_keeps_run_boundaries() {
        let s = AnnotatedString::builder()
            .append("a ")
            .append("b ")
            .styled("c", SpanStyle::new().bold().italic())
            .build();
        assert_eq!(s.runs().len(), 3);
        assert_eq!(s.text(), "a b c");
        assert!(s.runs()[0].style.is_plain());
        assert_eq!(s.runs()[2].style.font_weight, Some(FontWeight::Bold));
        assert_eq!(s.runs()[2].style.font_style, Some(FontStyle::Italic));
    }

    #[test]
    fn test_span_decorations_combine() {
        let style = SpanStyle::new()
            .decoration(TextDecoration::UNDERLINE)
            .decoration(TextDecoration::LINE_THROUGH);
        assert!(style.decoration.contains(TextDecoration::UNDERLINE));
        assert!(style.decoration.contains(TextDecoration::LINE_THROUGH));
    }

    #[test]
    fn test_find_tagged_walks_whole_tree() {
        let leaf = |tag| View::new(0, ViewKind::Box).modifier(Modifier::new().test_tag(tag));
        let tree = View::new(0, ViewKind::Column).with_children(vec![
            leaf("x"),
            View::new(0, ViewKind::Row).with_children(vec![leaf("x"), leaf("y")]),
        ]);
        assert_eq!(tree.find_tagged("x").len(), 2);
        assert_eq!(tree.find_tagged("y").len(), 1);
    }

    #[allow(non_snake_case)]
    fn Text(s: String) -> View {
        View::new(
            0,
            ViewKind::Text {
                text: s,
                color: Color::BLACK,
                font_size: 16.0,
                font_weight: FontWeight::Normal,
                align: TextAlign::Start,
            },
        )
    }
}
