use trilean::{Trilean, Uncertainty, MAYBE};

mod renderings {
    use super::*;

    #[test]
    fn trileans_render_on_a_three_character_alphabet() {
        assert_eq!(Trilean::new(true, false).to_string(), "1");
        assert_eq!(Trilean::new(false, false).to_string(), "0");
        assert_eq!(Trilean::new(true, true).to_string(), "2");
        assert_eq!(Trilean::new(false, true).to_string(), "2");
    }

    #[test]
    fn uncertainties_render_as_fixed_labels() {
        assert_eq!(MAYBE.to_string(), "Uncertain");
        assert_eq!(Uncertainty::new(true).to_string(), "Uncertain");
        assert_eq!(Uncertainty::new(false).to_string(), "Certain");
    }
}

mod parsing {
    use super::*;

    #[test]
    fn the_trilean_alphabet_parses() {
        assert_eq!("0".parse::<Trilean>(), Ok(Trilean::new(false, false)));
        assert_eq!("1".parse::<Trilean>(), Ok(Trilean::new(true, false)));

        let maybe = "2".parse::<Trilean>().unwrap();
        assert!(maybe.is_maybe());
        assert!(!maybe.certain());
    }

    #[test]
    fn the_uncertainty_labels_parse() {
        assert_eq!("Uncertain".parse::<Uncertainty>(), Ok(MAYBE));
        assert_eq!("Certain".parse::<Uncertainty>(), Ok(Uncertainty::new(false)));
    }

    #[test]
    fn anything_else_is_refused() {
        for s in ["", "3", "true", "maybe", "01", " 1"] {
            assert!(s.parse::<Trilean>().is_err());
        }

        for s in ["", "uncertain", "CERTAIN", "Uncertain "] {
            assert!(s.parse::<Uncertainty>().is_err());
        }
    }

    #[test]
    fn certain_renderings_round_trip() {
        for t in [Trilean::from(true), Trilean::from(false)] {
            assert_eq!(t.to_string().parse::<Trilean>(), Ok(t));
        }
    }
}
