// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Names defined by the HLA standard MIM (Management Object Model Interface
//! Module) for OMT 1516-2010 and 1516-2025.

/// Default XML namespace of IEEE 1516-2010 OMT documents.
pub const OMT_2010_NAMESPACE: &str = "http://standards.ieee.org/IEEE1516-2010";

/// Root element of an OMT document.
pub const OBJECT_MODEL: &str = "objectModel";

// Transportation names
pub const HLA_BEST_EFFORT: &str = "HLAbestEffort";
pub const HLA_RELIABLE: &str = "HLAreliable";

// Root classes
pub const HLA_OBJECT_ROOT: &str = "HLAobjectRoot";
pub const HLA_INTERACTION_ROOT: &str = "HLAinteractionRoot";

// Encodings
pub const HLA_VARIABLE_ARRAY: &str = "HLAvariableArray";
pub const HLA_FIXED_ARRAY: &str = "HLAfixedArray";
pub const HLA_FIXED_RECORD: &str = "HLAfixedRecord";
pub const HLA_VARIANT_RECORD: &str = "HLAvariantRecord";
pub const HLA_EXTENDABLE_VARIANT_RECORD: &str = "HLAextendableVariantRecord";

/// Cardinality of a variable length array.
pub const DYNAMIC: &str = "Dynamic";

// Basic data representations
pub const HLA_OCTET: &str = "HLAoctet";
pub const HLA_OCTET_PAIR_BE: &str = "HLAoctetPairBE";
pub const HLA_INTEGER16_BE: &str = "HLAinteger16BE";
pub const HLA_INTEGER32_BE: &str = "HLAinteger32BE";
pub const HLA_INTEGER64_BE: &str = "HLAinteger64BE";
pub const HLA_UNSIGNED_INTEGER16_BE: &str = "HLAunsignedInteger16BE";
pub const HLA_UNSIGNED_INTEGER32_BE: &str = "HLAunsignedInteger32BE";
pub const HLA_UNSIGNED_INTEGER64_BE: &str = "HLAunsignedInteger64BE";
pub const HLA_FLOAT32_BE: &str = "HLAfloat32BE";
pub const HLA_FLOAT64_BE: &str = "HLAfloat64BE";

// Simple datatypes
pub const HLA_ASCII_CHAR: &str = "HLAASCIIchar";
pub const HLA_BYTE: &str = "HLAbyte";
pub const HLA_UNICODE_CHAR: &str = "HLAunicodeChar";
pub const HLA_COUNT: &str = "HLAcount";
pub const HLA_SECONDS: &str = "HLAseconds";
pub const HLA_MSEC: &str = "HLAmsec";
pub const HLA_NORMALIZED_FEDERATE_HANDLE: &str = "HLAnormalizedFederateHandle";
pub const HLA_INDEX: &str = "HLAindex";
pub const HLA_INTEGER64_TIME: &str = "HLAinteger64Time";
pub const HLA_FLOAT64_TIME: &str = "HLAfloat64Time";

// Array datatypes
pub const HLA_ASCII_STRING: &str = "HLAASCIIstring";
pub const HLA_UNICODE_STRING: &str = "HLAunicodeString";
pub const HLA_OPAQUE_DATA: &str = "HLAopaqueData";
pub const HLA_TOKEN: &str = "HLAtoken";
pub const HLA_HANDLE: &str = "HLAhandle";
pub const HLA_TRANSPORTATION_NAME: &str = "HLAtransportationName";
pub const HLA_UPDATE_RATE_NAME: &str = "HLAupdateRateName";
pub const HLA_LOGICAL_TIME: &str = "HLAlogicalTime";
pub const HLA_TIME_INTERVAL: &str = "HLAtimeInterval";
pub const HLA_HANDLE_LIST: &str = "HLAhandleList";
pub const HLA_INTERACTION_SUB_LIST: &str = "HLAinteractionSubList";
pub const HLA_ARGUMENT_LIST: &str = "HLAargumentList";
pub const HLA_OBJECT_CLASS_BASED_COUNTS: &str = "HLAobjectClassBasedCounts";
pub const HLA_INTERACTION_COUNTS: &str = "HLAinteractionCounts";
pub const HLA_SYNCH_POINT_LIST: &str = "HLAsynchPointList";
pub const HLA_SYNCH_POINT_FEDERATE_LIST: &str = "HLAsynchPointFederateList";
pub const HLA_MODULE_DESIGNATOR_LIST: &str = "HLAmoduleDesignatorList";

// Enumerated datatypes
pub const HLA_BOOLEAN: &str = "HLAboolean";
pub const HLA_FEDERATE_STATE: &str = "HLAfederateState";
pub const HLA_TIME_STATE: &str = "HLAtimeState";
pub const HLA_OWNERSHIP: &str = "HLAownership";
pub const HLA_RESIGN_ACTION: &str = "HLAresignAction";
pub const HLA_ORDER_TYPE: &str = "HLAorderType";
pub const HLA_SWITCH: &str = "HLAswitch";
pub const HLA_SYNCH_POINT_STATUS: &str = "HLAsynchPointStatus";
pub const HLA_NORMALIZED_SERVICE_GROUP: &str = "HLAnormalizedServiceGroup";

// Enumerator values
pub const HLA_TRUE: &str = "HLAtrue";
pub const HLA_FALSE: &str = "HLAfalse";

/// Simple datatypes whose arrays are host strings.
pub const CHARACTER_TYPES: [&str; 2] = [HLA_ASCII_CHAR, HLA_UNICODE_CHAR];
