use dynarr::{CapacityError, DynArray, Geometric, GlobalAlloc, GlobalArray, DEFAULT_CAPACITY, GLOBAL_ALLOC};

const FIBBO8: [i32; 8] = [0, 1, 1, 2, 3, 5, 8, 13];

fn fibbo_array() -> GlobalArray<i32> {
    let mut arr = GlobalArray::new().unwrap();
    for v in FIBBO8 {
        arr.push(v).unwrap();
    }
    arr
}

#[test]
fn push_fills_in_order() {
    let arr = fibbo_array();
    assert_eq!(arr.len(), FIBBO8.len());
    for (i, v) in FIBBO8.iter().enumerate() {
        assert_eq!(arr[i], *v);
    }
}

#[test]
fn pop_removes_from_the_end() {
    let mut arr = fibbo_array();
    for _ in 0..3 {
        arr.pop();
    }
    assert_eq!(arr.len(), 5);
    assert_eq!(arr.as_slice(), &FIBBO8[..5]);
}

#[test]
fn clear_empties_the_array() {
    let mut arr = fibbo_array();
    arr.clear();
    assert_eq!(arr.len(), 0);
    assert!(arr.is_empty());
}

#[test]
fn default_capacity_growth_is_monotonic() {
    assert_eq!(DEFAULT_CAPACITY, 1);
    let mut arr = GlobalArray::new().unwrap();
    assert_eq!(arr.capacity(), DEFAULT_CAPACITY);
    let mut previous = arr.capacity();
    for v in 0..5 {
        arr.push(v).unwrap();
        assert!(arr.len() < arr.capacity());
        assert!(arr.capacity() >= previous);
        previous = arr.capacity();
    }
    assert_eq!(arr.as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn growth_coefficient_three() {
    let mut arr: GlobalArray<i32, Geometric<3>> =
        DynArray::with_capacity_in(1, &GLOBAL_ALLOC).unwrap();
    for v in 0..10 {
        arr.push(v).unwrap();
        assert!(arr.len() < arr.capacity());
    }
    assert_eq!(arr.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(arr.capacity(), 27);
}

#[test]
fn back_reads_the_value_pop_discards() {
    let mut arr = fibbo_array();
    assert_eq!(arr.back(), Some(&13));
    let last = *arr.back().unwrap();
    assert_eq!(arr.pop(), Some(last));
    assert_eq!(arr.back(), Some(&8));

    *arr.back_mut().unwrap() = 21;
    assert_eq!(arr.back(), Some(&21));
}

#[test]
fn reserve_admits_requested_len() {
    let mut arr = GlobalArray::<i32>::new().unwrap();
    arr.reserve(100).unwrap();
    let capacity = arr.capacity();
    assert!(capacity > 100);
    for v in 0..100 {
        arr.push(v).unwrap();
    }
    assert_eq!(arr.capacity(), capacity);
}

#[test]
fn owned_elements_survive_reallocation() {
    let mut arr = GlobalArray::new().unwrap();
    for i in 0..50 {
        arr.push(format!("value-{}", i)).unwrap();
    }
    assert_eq!(arr.len(), 50);
    for i in 0..50 {
        assert_eq!(arr[i], format!("value-{}", i));
    }
}

#[test]
fn with_capacity_starts_with_exact_slots() {
    let arr = GlobalArray::<i32>::with_capacity(16).unwrap();
    assert_eq!(arr.capacity(), 16);
    assert_eq!(arr.len(), 0);
}

#[test]
fn zero_capacity_construction_fails() {
    assert!(matches!(
        GlobalArray::<i32>::with_capacity(0),
        Err(CapacityError::ZeroCapacity),
    ));
}

#[test]
fn works_with_a_borrowed_allocator() {
    let alloc = GlobalAlloc;
    let mut arr: DynArray<i32, GlobalAlloc> = DynArray::new_in(&alloc).unwrap();
    for v in FIBBO8 {
        arr.push(v).unwrap();
    }
    assert_eq!(arr.as_slice(), &FIBBO8);
}

#[test]
fn slice_access_through_deref() {
    let arr = fibbo_array();
    assert_eq!(arr.first(), Some(&0));
    assert_eq!(arr.get(7), Some(&13));
    assert_eq!(arr.get(8), None);
    let sum: i32 = arr.iter().sum();
    assert_eq!(sum, FIBBO8.iter().sum());
}
