use trilean::{Trilean, Uncertainty, MAYBE};

mod basic {
    use super::*;

    #[test]
    fn default_is_certain_false() {
        let t = Trilean::default();

        assert!(t == false);
        assert!(!t.certain());
        assert!(!t.is_maybe());
        assert!(t.is_false());
    }

    #[test]
    fn boolean_construction() {
        for b in [true, false] {
            let t = Trilean::from(b);

            assert!(t == b);
            assert!(b == t);
            assert_eq!(t.certain(), b);
            assert!(!t.is_maybe());
        }
    }

    #[test]
    fn explicit_construction() {
        assert!(Trilean::new(true, false).is_true());
        assert!(Trilean::new(false, false).is_false());
        assert!(Trilean::new(true, true).is_maybe());
        assert!(Trilean::new(false, true).is_maybe());
    }

    #[test]
    fn construction_from_uncertainty() {
        let t = Trilean::from(MAYBE);

        assert!(t.is_maybe());
        // The value flag of a trilean made from pure uncertainty rests at false.
        assert!(!t.certain());

        let u = Trilean::from(Uncertainty::new(false));
        assert!(u.is_false());
        assert!(!u.is_maybe());
    }

    #[test]
    fn copies_are_bit_for_bit() {
        for value in [true, false] {
            for uncertain in [true, false] {
                let t = Trilean::new(value, uncertain);
                let copy = t;

                assert_eq!(copy.certain(), t.certain());
                assert_eq!(copy.is_maybe(), t.is_maybe());
            }
        }
    }

    #[test]
    fn certain_reads_through_uncertainty() {
        let t = Trilean::new(true, true);

        assert!(t.certain());
        assert!(!t.is_true());
        assert!(!t.is_false());
    }
}

mod decisions {
    use super::*;

    #[test]
    fn only_certain_true_decides_true() {
        assert!(Trilean::new(true, false).is_true());

        assert!(!Trilean::new(false, false).is_true());
        assert!(!Trilean::new(true, true).is_true());
        assert!(!Trilean::new(false, true).is_true());
    }

    #[test]
    fn a_maybe_is_never_definitively_false() {
        assert!(Trilean::new(false, false).is_false());

        assert!(!Trilean::new(true, false).is_false());
        assert!(!Trilean::new(true, true).is_false());
        assert!(!Trilean::new(false, true).is_false());
    }

    #[test]
    fn fallible_extraction() {
        assert_eq!(bool::try_from(Trilean::from(true)), Ok(true));
        assert_eq!(bool::try_from(Trilean::from(false)), Ok(false));

        assert!(bool::try_from(Trilean::new(true, true)).is_err());
        assert!(bool::try_from(Trilean::new(false, true)).is_err());
    }
}
