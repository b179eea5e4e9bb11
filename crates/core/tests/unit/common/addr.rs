use mipsim_core::common::addr::{AddressClass, Region, addr_to_imm, imm_to_addr};
use mipsim_core::common::error::AddressError;
use proptest::prelude::*;
use rstest::rstest;

fn expected_class(region: Region, addr: u64) -> AddressClass {
    if (region.supported_end()..region.valid_end()).contains(&addr) {
        AddressClass::Unsupported
    } else if (region.base()..region.supported_end()).contains(&addr) {
        if (addr - region.base()) % region.element_size() == 0 {
            AddressClass::Supported
        } else {
            AddressClass::Misaligned
        }
    } else {
        AddressClass::OutOfRange
    }
}

proptest! {
    #[test]
    fn text_classification_matches_bounds(addr in 0u64..0x2000_0000) {
        prop_assert_eq!(Region::TEXT.classify(addr), expected_class(Region::TEXT, addr));
    }

    #[test]
    fn data_classification_matches_bounds(addr in 0x0f00_0000u64..0x1100_0000) {
        prop_assert_eq!(Region::DATA.classify(addr), expected_class(Region::DATA, addr));
    }

    #[test]
    fn supported_addresses_map_to_slot_indices(index in 0usize..256) {
        let addr = Region::DATA.address_of(index);
        prop_assert_eq!(Region::DATA.check(addr), Ok(index));
    }

    #[test]
    fn immediate_scaling_round_trips(imm in -32_768i64..=536_870_911) {
        prop_assert_eq!(addr_to_imm(imm_to_addr(imm)), imm);
    }
}

#[rstest]
#[case(0x0040_0000, AddressClass::Supported)]
#[case(0x004f_fffc, AddressClass::Supported)]
#[case(0x0040_0002, AddressClass::Misaligned)]
#[case(0x0050_0000, AddressClass::Unsupported)]
#[case(0x0fff_fffc, AddressClass::Unsupported)]
#[case(0x1000_0000, AddressClass::OutOfRange)]
#[case(0x003f_fffc, AddressClass::OutOfRange)]
fn text_boundaries(#[case] addr: u64, #[case] class: AddressClass) {
    assert_eq!(Region::TEXT.classify(addr), class);
}

#[rstest]
#[case(0x1001_0000, AddressClass::Supported)]
#[case(0x1001_07f8, AddressClass::Supported)]
#[case(0x1001_0004, AddressClass::Misaligned)]
#[case(0x1001_0800, AddressClass::Unsupported)]
#[case(0x1003_fff8, AddressClass::Unsupported)]
#[case(0x1004_0000, AddressClass::OutOfRange)]
#[case(0x1000_fff8, AddressClass::OutOfRange)]
fn data_boundaries(#[case] addr: u64, #[case] class: AddressClass) {
    assert_eq!(Region::DATA.classify(addr), class);
}

#[test]
fn negative_values_are_out_of_range() {
    assert!(matches!(
        Region::DATA.check_value(-8),
        Err(AddressError::OutOfRange { addr: -8, .. })
    ));
}

#[test]
fn unsupported_error_names_storage_end() {
    let err = Region::DATA.check(0x1001_0800).unwrap_err();
    assert_eq!(
        err.to_string(),
        "data address 0x10010800 is valid but not supported (storage ends at 0x10010800)"
    );
}
