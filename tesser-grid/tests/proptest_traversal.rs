use proptest::prelude::*;
use tesser_grid::Range;

// Property 1: a full-array walk at stride 1 visits every offset exactly once,
// in row-major order.
proptest! {
    #[test]
    fn prop_dense_walk_visits_all(
        d0 in 1usize..12,
        d1 in 1usize..12,
        d2 in 1usize..12
    ) {
        let range = Range::new([d0, d1, d2], 1, 0).unwrap();
        let mut cursor = range.begin();
        let mut expected = 0usize;
        while !cursor.is_done() {
            prop_assert_eq!(cursor.offset(), expected);
            expected += 1;
            cursor.advance();
        }
        prop_assert_eq!(expected, d0 * d1 * d2);
    }
}

// Property 2: the block grid has ceil(d_i / B) positions per axis.
proptest! {
    #[test]
    fn prop_block_grid_count(
        d0 in 1usize..40,
        d1 in 1usize..40,
        block in 1usize..9
    ) {
        let range = Range::new([d0, d1], block, 0).unwrap();
        let blocks = |d: usize| d.div_ceil(block);
        prop_assert_eq!(range.dimensions(), [blocks(d0), blocks(d1)]);

        let mut cursor = range.begin();
        let mut count = 0usize;
        while !cursor.is_done() {
            count += 1;
            cursor.advance();
        }
        prop_assert_eq!(count, blocks(d0) * blocks(d1));
    }
}

// Property 3: advancing through an entire (possibly reshaped, re-seated)
// range and retreating the same number of steps returns to the start.
proptest! {
    #[test]
    fn prop_advance_retreat_roundtrip(
        d0 in 2usize..10,
        d1 in 2usize..10,
        sub0 in 1usize..10,
        sub1 in 1usize..10,
        row in 0usize..4,
        col in 0usize..4
    ) {
        let sub0 = sub0.min(d0 - 1);
        let sub1 = sub1.min(d1 - 1);
        let start = (row % d0) * d1 + (col % d1);

        let mut range = Range::new([d0, d1], 1, 0).unwrap();
        range.set_dimensions([sub0, sub1]);
        range.set_offsets(start);

        let total = range.num_positions();
        let mut cursor = range.begin();
        for _ in 0..total {
            cursor.advance();
        }
        prop_assert!(cursor.is_done());
        prop_assert_eq!(cursor.offset(), range.end_offset());
        for _ in 0..total {
            cursor.retreat();
        }
        prop_assert_eq!(cursor.offset(), start);
        prop_assert_eq!(cursor.index(), [0, 0]);
    }
}

// Property 4: tiling a 2-D array with BxB blocks (boundary blocks truncated)
// visits every element exactly once.
proptest! {
    #[test]
    fn prop_block_tiling_partitions_array(
        d0 in 1usize..20,
        d1 in 1usize..20,
        block in 1usize..7
    ) {
        let dims = [d0, d1];
        let inter = Range::new(dims, block, 0).unwrap();
        let mut intra = Range::new(dims, 1, 0).unwrap();

        let mut visits = vec![0u32; d0 * d1];
        let mut block_cursor = inter.begin();
        while !block_cursor.is_done() {
            let mut extents = [0usize; 2];
            for axis in 0..2 {
                let idx = block_cursor.index_at(axis);
                extents[axis] = if idx == inter.dimension(axis) - 1 {
                    dims[axis] - idx * block
                } else {
                    block
                };
            }
            intra.set_dimensions(extents);
            intra.set_offsets(block_cursor.offset());

            let mut elem = intra.begin();
            while !elem.is_done() {
                visits[elem.offset()] += 1;
                elem.advance();
            }
            block_cursor.advance();
        }

        prop_assert!(visits.iter().all(|&v| v == 1));
    }
}
