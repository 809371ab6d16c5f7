//! Error path and edge case tests
//!
//! These tests focus on caller-input failures:
//! - Negative capacities on construction and resize
//! - Indexing past capacity or into unfilled slots
//! - Zero-capacity rings

use ringq::{RingBuffer, RingError};

// ============================================================================
// Capacity Validation
// ============================================================================

mod capacity_tests {
    use super::*;

    #[test]
    fn test_new_negative_i32() {
        let result = RingBuffer::<String>::new(-1);
        assert!(matches!(result, Err(RingError::InvalidCapacity { .. })));
    }

    #[test]
    fn test_new_negative_i64_reports_value() {
        let err = RingBuffer::<u8>::new(-42i64).unwrap_err();
        assert!(err.to_string().contains("-42"));
    }

    #[test]
    fn test_resize_negative_keeps_state() {
        let ring = RingBuffer::new(4).unwrap();
        for v in 0..6 {
            ring.append(v);
        }
        let before = (ring.len(), ring.base(), ring.data());

        let err = ring.resize(-1).unwrap_err();
        assert_eq!(
            err,
            RingError::InvalidCapacity {
                requested: "-1".to_string()
            }
        );
        assert_eq!((ring.len(), ring.base(), ring.data()), before);
    }

    #[test]
    fn test_resize_negative_on_empty() {
        let ring: RingBuffer<u8> = RingBuffer::new(2).unwrap();
        assert!(ring.resize(i8::MIN).is_err());
        assert_eq!(ring.len(), 2);
    }
}

// ============================================================================
// Index Validation
// ============================================================================

mod index_tests {
    use super::*;

    #[test]
    fn test_get_past_capacity() {
        let ring = RingBuffer::from_vec(vec!['a', 'b']);
        assert!(matches!(
            ring.get(2),
            Err(RingError::IndexOutOfRange {
                index: 2,
                capacity: 2,
                stored: 2
            })
        ));
    }

    #[test]
    fn test_get_huge_index() {
        let ring = RingBuffer::from_vec(vec![1u64, 2, 3]);
        assert!(ring.get(usize::MAX).is_err());
    }

    #[test]
    fn test_set_into_unfilled_slot() {
        let ring = RingBuffer::new(4).unwrap();
        ring.append(1);
        assert!(ring.set(3, 9).is_err());
        assert_eq!(ring.data(), vec![1]);
    }

    #[test]
    fn test_set_past_capacity() {
        let ring = RingBuffer::from_vec(vec![0; 3]);
        assert!(matches!(
            ring.set(3, 1),
            Err(RingError::IndexOutOfRange { index: 3, .. })
        ));
    }
}

// ============================================================================
// Zero Capacity
// ============================================================================

mod zero_capacity_tests {
    use super::*;

    #[test]
    fn test_zero_capacity_get_errors() {
        let ring: RingBuffer<i32> = RingBuffer::new(0).unwrap();
        assert!(matches!(
            ring.get(0),
            Err(RingError::IndexOutOfRange { capacity: 0, .. })
        ));
    }

    #[test]
    fn test_zero_capacity_append_is_noop() {
        let ring = RingBuffer::new(0).unwrap();
        for v in 0..10 {
            ring.append(v);
        }
        assert!(ring.is_empty());
        assert_eq!(ring.base(), 0);
    }

    #[test]
    fn test_zero_capacity_grows_back() {
        let ring = RingBuffer::new(0).unwrap();
        ring.resize(2).unwrap();
        ring.append("x");
        ring.append("y");
        ring.append("z");
        assert_eq!(ring.slice(), vec!["y", "z"]);
    }

    #[test]
    fn test_zero_capacity_range_visits_nothing() {
        let ring: RingBuffer<i32> = RingBuffer::new(0).unwrap();
        let mut count = 0;
        ring.range(|_| count += 1);
        assert_eq!(count, 0);
    }
}
