//! Removal of phase-boundary samples.
//!
//! When a phase transition lies inside the requested pressure range, the
//! service inserts extra samples at the saturation pressure: one per phase,
//! at identical pressure. Downstream consumers expect exactly one row per
//! (temperature, pressure) with smoothly varying properties, so both samples
//! of every boundary are dropped.
//!
//! Only indices `j` in `1..=len-2` are compared with `j + 1`. A label change
//! between the first two samples is therefore never detected; this mirrors the
//! tables generated so far and is covered by a test.

use ft_webbook::IsothermResponse;

/// Sorted, de-duplicated indices of samples that sit on a phase boundary.
pub fn phase_boundary_indices<S: PartialEq>(phase: &[S]) -> Vec<usize> {
    boundary_mask(phase)
        .iter()
        .enumerate()
        .filter_map(|(i, &marked)| marked.then_some(i))
        .collect()
}

fn boundary_mask<S: PartialEq>(phase: &[S]) -> Vec<bool> {
    let mut mask = vec![false; phase.len()];
    for j in 1..phase.len().saturating_sub(1) {
        if phase[j] != phase[j + 1] {
            mask[j] = true;
            mask[j + 1] = true;
        }
    }
    mask
}

fn retain_unmarked<T>(values: Vec<T>, mask: &[bool]) -> Vec<T> {
    values
        .into_iter()
        .zip(mask)
        .filter_map(|(v, &marked)| (!marked).then_some(v))
        .collect()
}

/// Drop boundary samples from every column of the response.
///
/// Returns the filtered response and the number of removed samples.
pub fn remove_phase_boundaries(response: IsothermResponse) -> (IsothermResponse, usize) {
    let mask = boundary_mask(&response.phase);
    let removed = mask.iter().filter(|&&m| m).count();
    if removed == 0 {
        return (response, 0);
    }

    let filtered = IsothermResponse {
        phase: retain_unmarked(response.phase, &mask),
        pressure: retain_unmarked(response.pressure, &mask),
        density: retain_unmarked(response.density, &mask),
        viscosity: retain_unmarked(response.viscosity, &mask),
        enthalpy: retain_unmarked(response.enthalpy, &mask),
    };
    (filtered, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn response_from_labels(labels: &[&str]) -> IsothermResponse {
        let n = labels.len();
        IsothermResponse {
            phase: labels.iter().map(|s| s.to_string()).collect(),
            pressure: (0..n).map(|i| 1.0e5 * (i + 1) as f64).collect(),
            density: (0..n).map(|i| 1000.0 + i as f64).collect(),
            viscosity: (0..n).map(|i| 100.0 + i as f64).collect(),
            enthalpy: (0..n).map(|i| 10.0 * i as f64).collect(),
        }
    }

    #[test]
    fn two_boundaries_removed() {
        let labels = ["A", "A", "A", "B", "B", "A", "A"];
        assert_eq!(phase_boundary_indices(&labels), vec![2, 3, 4, 5]);

        // Indices 2..=5 are removed, so 3 of 7 samples survive. Written-up
        // versions of this example that list four survivors miscount.
        let (filtered, removed) = remove_phase_boundaries(response_from_labels(&labels));
        assert_eq!(removed, 4);
        assert_eq!(filtered.phase, vec!["A", "A", "A"]);
        // Kept original indices 0, 1 and 6, all columns aligned
        assert_eq!(filtered.pressure, vec![1.0e5, 2.0e5, 7.0e5]);
        assert_eq!(filtered.density, vec![1000.0, 1001.0, 1006.0]);
        assert_eq!(filtered.viscosity, vec![100.0, 101.0, 106.0]);
        assert_eq!(filtered.enthalpy, vec![0.0, 10.0, 60.0]);
    }

    #[test]
    fn liquid_vapor_transition() {
        let labels = ["liquid", "liquid", "liquid", "vapor", "vapor", "vapor"];
        let (filtered, removed) = remove_phase_boundaries(response_from_labels(&labels));
        assert_eq!(removed, 2);
        assert_eq!(filtered.phase, vec!["liquid", "liquid", "vapor", "vapor"]);
        assert_eq!(filtered.pressure, vec![1.0e5, 2.0e5, 5.0e5, 6.0e5]);
    }

    #[test]
    fn uniform_phase_is_noop() {
        let labels = ["vapor"; 6];
        let original = response_from_labels(&labels);
        let (filtered, removed) = remove_phase_boundaries(original.clone());
        assert_eq!(removed, 0);
        assert_eq!(filtered, original);
    }

    #[test]
    fn adjacent_boundaries_share_an_index() {
        let labels = ["A", "A", "B", "A", "A"];
        assert_eq!(phase_boundary_indices(&labels), vec![1, 2, 3]);
    }

    #[test]
    fn change_after_first_sample_is_not_detected() {
        // Known limitation: the scan starts at index 1.
        let labels = ["A", "B", "B", "B"];
        assert!(phase_boundary_indices(&labels).is_empty());
    }

    #[test]
    fn change_at_last_sample_is_detected() {
        let labels = ["A", "A", "A", "B"];
        assert_eq!(phase_boundary_indices(&labels), vec![2, 3]);
    }

    #[test]
    fn short_sequences_are_untouched() {
        let empty: [&str; 0] = [];
        assert!(phase_boundary_indices(&empty).is_empty());
        assert!(phase_boundary_indices(&["A"]).is_empty());
        assert!(phase_boundary_indices(&["A", "B"]).is_empty());
    }

    proptest! {
        #[test]
        fn columns_stay_aligned(labels in proptest::collection::vec(prop_oneof!["A", "B"], 0..40)) {
            let refs: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();
            let original = response_from_labels(&refs);
            let (filtered, removed) = remove_phase_boundaries(original.clone());

            prop_assert_eq!(filtered.len() + removed, original.len());
            prop_assert_eq!(filtered.pressure.len(), filtered.len());
            prop_assert_eq!(filtered.density.len(), filtered.len());
            prop_assert_eq!(filtered.viscosity.len(), filtered.len());
            prop_assert_eq!(filtered.enthalpy.len(), filtered.len());

            for i in 0..filtered.len() {
                // Each synthetic row is identified by its pressure
                let k = (filtered.pressure[i] / 1.0e5).round() as usize - 1;
                prop_assert_eq!(&filtered.phase[i], &original.phase[k]);
                prop_assert_eq!(filtered.density[i], original.density[k]);
                prop_assert_eq!(filtered.enthalpy[i], original.enthalpy[k]);
            }
        }

        #[test]
        fn uniform_labels_keep_everything(n in 0usize..40) {
            let labels = vec!["supercritical"; n];
            let (filtered, removed) = remove_phase_boundaries(response_from_labels(&labels));
            prop_assert_eq!(removed, 0);
            prop_assert_eq!(filtered.len(), n);
        }
    }
}
