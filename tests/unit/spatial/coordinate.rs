//! Tests for coordinate arithmetic, conversions, distances and classification

#[cfg(test)]
mod tests {
    use gridcoord::{Coordinate, Direction, GridError};
    use num_traits::Zero;
    use std::collections::HashSet;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(coordinate: Coordinate) -> u64 {
        let mut hasher = DefaultHasher::new();
        coordinate.hash(&mut hasher);
        hasher.finish()
    }

    // Tests named constants and the default value
    #[test]
    fn test_constants() {
        assert_eq!(Coordinate::ZERO, Coordinate::new(0, 0));
        assert_eq!(Coordinate::ONE, Coordinate::new(1, 1));
        assert_eq!(Coordinate::default(), Coordinate::ZERO);
        assert!(Coordinate::zero().is_zero());
        assert!(!Coordinate::ONE.is_zero());
    }

    // Tests tuple and array conversions in both directions
    // Verified by swapping components in From<(i32, i32)>
    #[test]
    fn test_conversions() {
        let from_tuple: Coordinate = (3, -7).into();
        let from_array: Coordinate = [3, -7].into();
        assert_eq!(from_tuple, Coordinate::new(3, -7));
        assert_eq!(from_array, from_tuple);

        let tuple: (i32, i32) = from_tuple.into();
        let array: [i32; 2] = from_tuple.into();
        assert_eq!(tuple, (3, -7));
        assert_eq!(array, [3, -7]);
    }

    // Tests equal coordinates hash equally and transposed coordinates stay distinct
    #[test]
    fn test_equality_and_hashing() {
        let a = Coordinate::new(4, 9);
        let b = Coordinate::from((4, 9));
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));

        let transposed = Coordinate::new(9, 4);
        assert_ne!(a, transposed);

        let set: HashSet<Coordinate> = [a, b, transposed].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    // Tests ordering compares x before y
    #[test]
    fn test_ordering() {
        let mut cells = vec![
            Coordinate::new(1, -1),
            Coordinate::new(0, 5),
            Coordinate::new(1, -3),
            Coordinate::new(-2, 0),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(-2, 0),
                Coordinate::new(0, 5),
                Coordinate::new(1, -3),
                Coordinate::new(1, -1),
            ]
        );
    }

    // Tests component-wise addition and subtraction
    // Verified by subtracting y from x in Sub
    #[test]
    fn test_add_and_subtract() {
        let a = Coordinate::new(2, -5);
        let b = Coordinate::new(-7, 11);

        assert_eq!(a + b, Coordinate::new(-5, 6));
        assert_eq!(a - b, Coordinate::new(9, -16));
        assert_eq!(a + b - b, a);
        assert_eq!(a + Coordinate::ZERO, a);
    }

    // Tests integer scaling in both operand orders
    #[test]
    fn test_integer_scaling() {
        let a = Coordinate::new(3, -4);
        assert_eq!(a * 3, Coordinate::new(9, -12));
        assert_eq!(3 * a, a * 3);
        assert_eq!(a * 0, Coordinate::ZERO);
        assert_eq!(a * -1, Coordinate::new(-3, 4));
    }

    // Tests float scaling rounds each component independently with ties to even
    // Verified by rounding half away from zero
    #[test]
    fn test_float_scaling() {
        let a = Coordinate::new(1, 3);
        assert_eq!(a * 2.5, Coordinate::new(2, 8));
        assert_eq!(2.5 * a, a * 2.5);
        assert_eq!(Coordinate::new(1, -1) * 0.5, Coordinate::ZERO);
        assert_eq!(Coordinate::new(10, -10) * 0.33, Coordinate::new(3, -3));
        assert_eq!(Coordinate::new(7, 2) * 1.0, Coordinate::new(7, 2));
    }

    // Tests component-wise absolute value
    #[test]
    fn test_abs() {
        assert_eq!(Coordinate::new(-3, 4).abs(), Coordinate::new(3, 4));
        assert_eq!(Coordinate::new(5, -6).abs(), Coordinate::new(5, 6));
        assert_eq!(Coordinate::ZERO.abs(), Coordinate::ZERO);
    }

    // Tests interpolation inside and outside the unit interval
    // Verified by clamping t to [0, 1]
    #[test]
    fn test_lerp() {
        let a = Coordinate::ZERO;
        let b = Coordinate::new(4, 2);

        assert_eq!(Coordinate::lerp(a, b, 0.0), a);
        assert_eq!(Coordinate::lerp(a, b, 1.0), b);
        assert_eq!(Coordinate::lerp(a, b, 0.25), Coordinate::new(1, 0));
        assert_eq!(Coordinate::lerp(a, b, 0.75), Coordinate::new(3, 2));
        assert_eq!(Coordinate::lerp(a, b, 2.0), Coordinate::new(8, 4));
        assert_eq!(Coordinate::lerp(a, b, -1.0), Coordinate::new(-4, -2));
    }

    // Tests only the scaled offset is rounded, not the absolute position
    // Verified by rounding a + (b - a) * t as a single float
    #[test]
    fn test_lerp_rounds_offset_only() {
        let a = Coordinate::new(1, 1);
        let b = Coordinate::new(2, 2);
        assert_eq!(Coordinate::lerp(a, b, 0.5), Coordinate::new(1, 1));

        let p = Coordinate::new(-3, 8);
        assert_eq!(Coordinate::lerp(p, p, 0.7), p);
    }

    // Tests Chebyshev and Manhattan distance
    #[test]
    fn test_distances() {
        let origin = Coordinate::ZERO;
        let target = Coordinate::new(3, 4);

        assert_eq!(origin.cardinal_distance(target), 7);
        assert_eq!(origin.diagonal_distance(target), 4);
        assert_eq!(target.cardinal_distance(origin), 7);
        assert_eq!(target.diagonal_distance(origin), 4);

        let a = Coordinate::new(-2, 5);
        let b = Coordinate::new(3, -1);
        assert_eq!(a.cardinal_distance(b), 11);
        assert_eq!(a.diagonal_distance(b), 6);
        assert_eq!(a.diagonal_distance(a), 0);
        assert_eq!(a.cardinal_distance(a), 0);
    }

    // Tests distances along one axis of the full i32 range
    #[test]
    fn test_distances_extreme_single_axis() {
        let low = Coordinate::new(i32::MIN, 0);
        let high = Coordinate::new(i32::MAX, 0);
        assert_eq!(low.diagonal_distance(high), u32::MAX);
        assert_eq!(low.cardinal_distance(high), u64::from(u32::MAX));
    }

    // Tests corner to corner distances across both axes do not overflow
    // Verified by summing the deltas as u32
    #[test]
    fn test_distances_extreme_both_axes() {
        let low = Coordinate::new(i32::MIN, i32::MIN);
        let high = Coordinate::new(i32::MAX, i32::MAX);
        assert_eq!(low.diagonal_distance(high), u32::MAX);
        assert_eq!(low.cardinal_distance(high), 2 * u64::from(u32::MAX));
        assert_eq!(high.cardinal_distance(low), low.cardinal_distance(high));

        let mixed = Coordinate::new(i32::MAX, i32::MIN);
        assert_eq!(
            Coordinate::new(i32::MIN, i32::MAX).cardinal_distance(mixed),
            2 * u64::from(u32::MAX)
        );
    }

    // Tests a coordinate compared with itself has no direction
    #[test]
    fn test_direction_to_self_is_undefined() {
        for cell in [Coordinate::ZERO, Coordinate::new(-4, 9), Coordinate::ONE] {
            assert_eq!(cell.direction_to(cell), Direction::Undefined);
        }
    }

    // Tests equal magnitudes classify as the matching diagonal
    // Verified by checking |dx| > |dy| before the diagonal branch
    #[test]
    fn test_direction_to_diagonals() {
        let origin = Coordinate::ZERO;
        assert_eq!(origin.direction_to(Coordinate::new(3, 3)), Direction::PosXPosY);
        assert_eq!(origin.direction_to(Coordinate::new(1, -1)), Direction::PosXNegY);
        assert_eq!(origin.direction_to(Coordinate::new(-3, -3)), Direction::NegXNegY);
        assert_eq!(origin.direction_to(Coordinate::new(-2, 2)), Direction::NegXPosY);
    }

    // Tests the strictly larger axis wins using its own sign
    // Verified by choosing the sign from the other axis
    #[test]
    fn test_direction_to_dominant_axis() {
        let origin = Coordinate::ZERO;
        assert_eq!(origin.direction_to(Coordinate::new(5, -4)), Direction::PositiveX);
        assert_eq!(origin.direction_to(Coordinate::new(5, 4)), Direction::PositiveX);
        assert_eq!(origin.direction_to(Coordinate::new(-5, 4)), Direction::NegativeX);
        assert_eq!(origin.direction_to(Coordinate::new(-1, -5)), Direction::NegativeY);
        assert_eq!(origin.direction_to(Coordinate::new(1, -5)), Direction::NegativeY);
        assert_eq!(origin.direction_to(Coordinate::new(0, 2)), Direction::PositiveY);
        assert_eq!(
            Coordinate::new(10, 10).direction_to(Coordinate::new(9, 30)),
            Direction::PositiveY
        );
    }

    // Tests stepping towards a point on a straight or diagonal line closes the gap by one
    #[test]
    fn test_direction_step_closes_distance() {
        let origin = Coordinate::new(2, -1);
        let targets = [
            Coordinate::new(2, 6),
            Coordinate::new(-5, -1),
            Coordinate::new(6, 3),
            Coordinate::new(-1, 2),
            Coordinate::new(3, -2),
        ];

        for target in targets {
            let step = origin + origin.direction_to(target).vector();
            assert_eq!(
                step.diagonal_distance(target),
                origin.diagonal_distance(target) - 1,
                "stepping from {origin} towards {target}"
            );
        }
    }

    // Tests neighbours follow direction vectors and Undefined stays put
    #[test]
    fn test_neighbor() {
        let origin = Coordinate::new(5, 5);
        assert_eq!(origin.neighbor(Direction::PositiveY), Coordinate::new(5, 6));
        assert_eq!(origin.neighbor(Direction::NegXNegY), Coordinate::new(4, 4));
        assert_eq!(origin.neighbor(Direction::Undefined), origin);
    }

    // Tests adjacents are returned in +y, +x, -y, -x order
    // Verified by reordering Direction::ORTHOGONAL
    #[test]
    fn test_adjacents_order() {
        assert_eq!(
            Coordinate::ZERO.adjacents(),
            [
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(0, -1),
                Coordinate::new(-1, 0),
            ]
        );

        let origin = Coordinate::new(-3, 7);
        for neighbor in origin.adjacents() {
            assert_eq!(origin.cardinal_distance(neighbor), 1);
        }
    }

    // Tests display formatting
    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(3, -4).to_string(), "(3, -4)");
        assert_eq!(Coordinate::ZERO.to_string(), "(0, 0)");
    }

    // Tests parsing accepts bare and parenthesised pairs
    // Verified by removing whitespace trimming
    #[test]
    fn test_parse_valid() {
        let cases = [
            ("3,-4", Coordinate::new(3, -4)),
            ("(3, -4)", Coordinate::new(3, -4)),
            ("  ( -1 , 2 ) ", Coordinate::new(-1, 2)),
            ("0,0", Coordinate::ZERO),
        ];

        for (input, expected) in cases {
            let parsed: Result<Coordinate, GridError> = input.parse();
            assert!(
                parsed.as_ref().is_ok_and(|c| *c == expected),
                "parsing {input:?} gave {parsed:?}"
            );
        }

        let cell = Coordinate::new(-12, 40);
        assert!(
            cell.to_string()
                .parse::<Coordinate>()
                .is_ok_and(|c| c == cell)
        );
    }

    // Tests malformed input is rejected with the offending text
    #[test]
    fn test_parse_invalid() {
        for input in ["3", "(1,2", "1,2)", "a,b", "1,2,3", "", "()"] {
            match input.parse::<Coordinate>() {
                Err(GridError::InvalidCoordinate { input: rejected, .. }) => {
                    assert_eq!(rejected, input);
                }
                other => unreachable!("expected InvalidCoordinate for {input:?}, got {other:?}"),
            }
        }
    }
}
