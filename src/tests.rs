#[cfg(test)]
mod tests {
    use anyhow::Result;
    use rand::Rng;

    use crate::test_utils::{
        SampleElement, SampleList, init_logging, random_element, random_elements, seeded_rng,
    };
    use crate::{Element, Tag, TagMismatch};

    /// Reference behaviour: raw elements plus the stages composed per type.
    #[derive(Default)]
    struct Model {
        elements: Vec<SampleElement>,
        int_stages: Vec<(i32, i32)>,
        string_stages: Vec<String>,
        float_stages: Vec<f64>,
    }

    impl Model {
        fn int(&self, x: i32) -> i32 {
            self.int_stages
                .iter()
                .fold(x, |x, &(m, a)| x.wrapping_mul(m).wrapping_add(a))
        }

        fn string(&self, s: String) -> String {
            self.string_stages
                .iter()
                .fold(s, |acc, suffix| acc + suffix)
        }

        fn float(&self, x: f64) -> f64 {
            self.float_stages.iter().fold(x, |x, k| x + k)
        }

        fn expected(&self) -> Vec<SampleElement> {
            self.elements
                .iter()
                .cloned()
                .map(|e| e.map(|a| self.int(a), |b| self.string(b), |c| self.float(c)))
                .collect()
        }
    }

    fn random_step(rng: &mut impl Rng, list: &mut SampleList, model: &mut Model) {
        match rng.gen_range(0..10) {
            0..=4 => {
                let e = random_element(rng);
                model.elements.push(e.clone());
                match e {
                    Element::First(a) => list.push(a),
                    Element::Second(b) => list.push(b),
                    Element::Third(c) => list.push(c),
                }
            }
            5 => {
                let (m, a) = (rng.gen_range(-3..4), rng.gen_range(-10..10));
                model.int_stages.push((m, a));
                list.modify_only::<i32, _>(move |x| x.wrapping_mul(m).wrapping_add(a));
            }
            6 => {
                let suffix = char::from(b'a' + rng.gen_range(0..26u8)).to_string();
                model.string_stages.push(suffix.clone());
                list.modify_only::<String, _>(move |s| s + &suffix);
            }
            7 => {
                let k = f64::from(rng.gen_range(-50..50i32));
                model.float_stages.push(k);
                list.modify_only::<f64, _>(move |x| x + k);
            }
            _ => match rng.gen_range(0..3) {
                0 => {
                    model.int_stages.clear();
                    list.reset::<i32, _>();
                }
                1 => {
                    model.string_stages.clear();
                    list.reset::<String, _>();
                }
                _ => {
                    model.float_stages.clear();
                    list.reset::<f64, _>();
                }
            },
        }
    }

    fn assert_matches_model(list: &SampleList, model: &Model) {
        let expected = model.expected();
        assert_eq!(list.iter().collect::<Vec<_>>(), expected);
        assert_eq!(list.len(), model.elements.len());

        let ints: Vec<i32> = expected
            .iter()
            .filter_map(|e| e.get::<i32, _>().copied())
            .collect();
        let strings: Vec<String> = expected
            .iter()
            .filter_map(|e| e.get::<String, _>().cloned())
            .collect();
        let floats: Vec<f64> = expected
            .iter()
            .filter_map(|e| e.get::<f64, _>().copied())
            .collect();

        assert_eq!(list.range_over::<i32, _>().collect::<Vec<_>>(), ints);
        assert_eq!(list.range_over::<String, _>().collect::<Vec<_>>(), strings);
        assert_eq!(list.range_over::<f64, _>().collect::<Vec<_>>(), floats);

        assert_eq!(list.count_of::<i32, _>(), ints.len());
        assert_eq!(list.count_of::<String, _>(), strings.len());
        assert_eq!(list.count_of::<f64, _>(), floats.len());

        assert_eq!(list.pipeline_stages::<i32, _>(), model.int_stages.len());
        assert_eq!(list.pipeline_stages::<String, _>(), model.string_stages.len());
        assert_eq!(list.pipeline_stages::<f64, _>(), model.float_stages.len());
    }

    #[test]
    fn test_walkthrough_int_string_double() {
        init_logging();
        let mut list = SampleList::new();
        list.push(1);
        list.push("a".to_string());
        list.push(2);

        list.modify_only::<i32, _>(|x| x * 10);
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec![
                Element::First(10),
                Element::Second("a".to_string()),
                Element::First(20),
            ]
        );

        list.modify_only::<i32, _>(|x| x + 1);
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec![
                Element::First(11),
                Element::Second("a".to_string()),
                Element::First(21),
            ]
        );

        list.reset::<i32, _>();
        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec![
                Element::First(1),
                Element::Second("a".to_string()),
                Element::First(2),
            ]
        );
    }

    #[test]
    fn test_newest_transformation_is_outermost() {
        let mut list = SampleList::new();
        list.push("x".to_string());
        list.modify_only::<String, _>(|s| s + "f");
        list.modify_only::<String, _>(|s| format!("g({})", s));
        assert_eq!(list.range_over::<String, _>().next().as_deref(), Some("g(xf)"));
    }

    #[test]
    fn test_reset_reproduces_inserted_values() {
        let mut rng = seeded_rng(7);
        let elements = random_elements(&mut rng, 64);
        let mut list = SampleList::from_elements(elements.clone());

        for k in 1..5i32 {
            list.modify_only::<f64, _>(move |x| x * f64::from(k));
            list.modify_only::<String, _>(|s| s.to_uppercase() + "?");
        }
        list.reset::<f64, _>();
        list.reset::<String, _>();

        let floats: Vec<f64> = elements
            .iter()
            .filter_map(|e| e.get::<f64, _>().copied())
            .collect();
        let strings: Vec<String> = elements
            .iter()
            .filter_map(|e| e.get::<String, _>().cloned())
            .collect();
        assert_eq!(list.range_over::<f64, _>().collect::<Vec<_>>(), floats);
        assert_eq!(list.range_over::<String, _>().collect::<Vec<_>>(), strings);
    }

    #[test]
    fn test_edits_on_one_type_leave_others_untouched() {
        let mut rng = seeded_rng(11);
        let mut list = SampleList::from_elements(random_elements(&mut rng, 100));

        let strings_before: Vec<String> = list.range_over::<String, _>().collect();
        let floats_before: Vec<f64> = list.range_over::<f64, _>().collect();

        list.modify_only::<i32, _>(|x| x.wrapping_mul(-7));
        list.modify_only::<i32, _>(|x| x ^ 0x55);
        assert_eq!(list.range_over::<String, _>().collect::<Vec<_>>(), strings_before);
        assert_eq!(list.range_over::<f64, _>().collect::<Vec<_>>(), floats_before);

        list.reset::<i32, _>();
        assert_eq!(list.range_over::<String, _>().collect::<Vec<_>>(), strings_before);
        assert_eq!(list.range_over::<f64, _>().collect::<Vec<_>>(), floats_before);
    }

    #[test]
    fn test_order_preserved_across_interleaved_edits() {
        let mut list = SampleList::new();
        let mut tags = Vec::new();
        for i in 0..30i32 {
            match i % 3 {
                0 => list.push(i),
                1 => list.push(i.to_string()),
                _ => list.push(f64::from(i)),
            }
            tags.push(Tag::ALL[i as usize % 3]);
            if i % 4 == 0 {
                list.modify_only::<i32, _>(|x| x + 1);
            }
            if i % 5 == 0 {
                list.reset::<i32, _>();
            }
        }
        assert_eq!(list.iter().map(|e| e.tag()).collect::<Vec<_>>(), tags);
    }

    #[test]
    fn test_each_realization_sees_current_pipelines() {
        let mut list = SampleList::from([Element::First(3), Element::Third(1.0)]);

        let before: Vec<_> = list.iter().collect();
        list.modify_only::<i32, _>(|x| x * x);
        let after: Vec<_> = list.iter().collect();
        list.modify_only::<f64, _>(|x| x - 1.0);
        let later: Vec<_> = list.iter().collect();

        assert_eq!(before, vec![Element::First(3), Element::Third(1.0)]);
        assert_eq!(after, vec![Element::First(9), Element::Third(1.0)]);
        assert_eq!(later, vec![Element::First(9), Element::Third(0.0)]);
    }

    #[test]
    fn test_view_can_be_realized_repeatedly() {
        let mut list = SampleList::new();
        list.push(4);
        list.push(5);
        list.modify_only::<i32, _>(|x| x * 3);

        let view = list.range_over::<i32, _>();
        let first: i32 = view.clone().sum();
        let second: i32 = view.sum();
        assert_eq!(first, 27);
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_from_transformed_elements() -> Result<()> {
        let mut list = SampleList::new();
        list.push(2.0);
        list.push(8);
        list.modify_only::<f64, _>(|x| x / 4.0);

        let mut iter = list.iter();
        let float: f64 = iter.next().expect("one float").try_into_value()?;
        assert_eq!(float, 0.5);

        let err = iter
            .next()
            .expect("one int")
            .try_into_value::<String, _>()
            .unwrap_err();
        assert_eq!(
            err,
            TagMismatch {
                expected: Tag::Second,
                found: Tag::First,
            }
        );
        Ok(())
    }

    #[test]
    fn test_random_operations_match_model() {
        init_logging();
        for seed in 0..20 {
            let mut rng = seeded_rng(seed);
            let mut list = SampleList::new();
            let mut model = Model::default();

            for _ in 0..200 {
                random_step(&mut rng, &mut list, &mut model);
                assert_matches_model(&list, &model);
            }
        }
    }
}
