#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::error::PhysicsError;
    use crate::figure::{Figure, FigureBuilder, RotationKey};
    use crate::tests::test_utils::{dash, grid};

    #[test]
    fn test_rotation_key_cycle() {
        assert_eq!(RotationKey::Normal.next(), RotationKey::Left);
        assert_eq!(RotationKey::Left.next(), RotationKey::Down);
        assert_eq!(RotationKey::Down.next(), RotationKey::Right);
        assert_eq!(RotationKey::Right.next(), RotationKey::Normal);

        assert_eq!(RotationKey::Normal.prev(), RotationKey::Right);
        for key in RotationKey::ALL {
            assert_eq!(key.next().prev(), key);
        }
    }

    #[test]
    fn test_reset_creates_four_empty_states() {
        let mut figure = Figure::default();
        assert!(!figure.is_ready());

        figure.reset(3, 2).expect("reset");
        assert!(figure.is_ready());
        assert_eq!(figure.get_current_key(), Ok(RotationKey::Normal));
        for key in RotationKey::ALL {
            let state = figure.get_state(key).expect("state");
            assert_eq!((state.width(), state.height()), (3, 2));
            assert!(state.is_clear());
        }
        assert_eq!(figure.width(), Ok(3));
        assert_eq!(figure.height(), Ok(2));
    }

    #[test]
    fn test_reset_rejects_zero_dimensions() {
        let mut figure = Figure::default();
        assert!(matches!(
            figure.reset(0, 2),
            Err(PhysicsError::Dimension { .. })
        ));
    }

    #[test]
    fn test_uninitialised_figure_is_not_ready() {
        let figure = Figure::default();
        assert!(matches!(
            figure.get_current_state(),
            Err(PhysicsError::NotReady(_))
        ));
        assert!(figure.get_current_key().is_err());

        let mut figure = Figure::default();
        assert!(matches!(
            figure.set_state(RotationKey::Normal, grid(&[&[1]])),
            Err(PhysicsError::NotReady(_))
        ));
    }

    #[test]
    fn test_set_state_checks_dimensions() {
        let mut figure = Figure::default();
        figure.reset(2, 2).expect("reset");
        assert!(matches!(
            figure.set_state(RotationKey::Left, grid(&[&[1, 1, 1]])),
            Err(PhysicsError::Shape(_))
        ));
        figure
            .set_state(RotationKey::Left, grid(&[&[1, 0], &[1, 0]]))
            .expect("matching state");
        assert_eq!(
            figure.get_state(RotationKey::Left),
            Ok(&grid(&[&[1, 0], &[1, 0]]))
        );
    }

    #[test]
    fn test_change_state_by_key() {
        let mut figure = dash();
        assert_eq!(figure.get_current_key(), Ok(RotationKey::Normal));

        figure.change_state_by_key(RotationKey::Left);
        assert_eq!(figure.get_current_key(), Ok(RotationKey::Left));
        assert_eq!(
            figure.get_current_state().expect("state").row(0),
            Some(&[1, 0, 0, 0][..])
        );
    }

    #[test]
    fn test_builder_requires_reset() {
        let mut builder = FigureBuilder::new();
        assert!(matches!(
            builder.get_result(),
            Err(PhysicsError::NotReady(_))
        ));
        assert!(
            builder
                .set_state(RotationKey::Normal, vec![vec![1]])
                .is_err()
        );
        assert!(builder.set_current_state(RotationKey::Down).is_err());
    }

    #[test]
    fn test_builder_produces_independent_copies() {
        let mut builder = FigureBuilder::new();
        builder
            .reset(2, 1)
            .expect("reset")
            .set_state(RotationKey::Normal, vec![vec![1, 1]])
            .expect("state");
        let first = builder.get_result().expect("first");

        builder
            .set_state(RotationKey::Normal, vec![vec![1, 0]])
            .expect("state");
        let second = builder.get_result().expect("second");

        assert_eq!(first.get_current_state(), Ok(&grid(&[&[1, 1]])));
        assert_eq!(second.get_current_state(), Ok(&grid(&[&[1, 0]])));
    }

    #[test]
    fn test_builder_set_current_state() {
        let mut builder = FigureBuilder::new();
        builder.reset(1, 1).expect("reset");
        builder
            .set_current_state(RotationKey::Right)
            .expect("current state");
        let figure = builder.get_result().expect("figure");
        assert_eq!(figure.get_current_key(), Ok(RotationKey::Right));
    }

    #[test]
    fn test_builder_rejects_bad_rows() {
        let mut builder = FigureBuilder::new();
        builder.reset(2, 2).expect("reset");
        assert!(matches!(
            builder.set_state(RotationKey::Normal, vec![vec![1, 1], vec![1]]),
            Err(PhysicsError::Shape(_))
        ));
    }
}
