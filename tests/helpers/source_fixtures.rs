//! Common YANG source fixtures for tests.

pub const MINIMAL_MODULE: &str = r#"module m { namespace "urn:m"; prefix m; }"#;

pub const CONTAINER_MODULE: &str = r#"
module m {
  namespace "urn:m";
  prefix m;
  container top {
    leaf x {
      type string;
    }
  }
}
"#;

pub const MINIMAL_SUBMODULE: &str = r#"
submodule acme-types {
  belongs-to acme-system {
    prefix acme;
  }
}
"#;

pub const FULL_MODULE: &str = r#"
module acme-system {
  yang-version 1;
  namespace "http://acme.example.com/system";
  prefix "acme";

  import ietf-yang-types {
    prefix yang;
    revision-date 2010-09-24;
  }
  include acme-types;

  organization "ACME Inc.";
  contact "joe@acme.example.com";
  description
    "The module for entities " +
    "implementing the ACME system.";

  revision 2007-06-09 {
    description "Initial revision.";
  }
  revision 2007-01-01;

  extension annotation {
    argument name {
      yin-element false;
    }
    description "Attach a named annotation.";
  }

  feature local-storage {
    description "Local storage is available.";
  }

  identity crypto-alg {
    description "Base identity for algorithms.";
  }

  typedef percent {
    type uint8 {
      range "0 .. 100";
    }
    units "percent";
  }

  grouping target {
    leaf address {
      type string;
    }
    leaf port {
      type uint16;
    }
  }

  container system {
    presence "Enables the system";
    leaf host-name {
      type string {
        length "1..253";
        pattern '[a-zA-Z0-9\-\.]+';
      }
      description "Hostname for this system";
    }
    leaf-list domain-search {
      type string;
      ordered-by user;
    }
    list user {
      key "name";
      unique "uid";
      leaf name {
        type string;
      }
      leaf uid {
        type int32;
      }
      leaf class {
        type enumeration {
          enum admin;
          enum viewer {
            value 2;
          }
        }
      }
    }
    choice transfer-method {
      leaf transfer-interval {
        type uint16;
      }
      case daily {
        leaf daily {
          type empty;
        }
      }
    }
    uses target {
      refine port {
        default 80;
      }
    }
    acme:annotation "owned-by-ops";
  }

  augment "/system" {
    when "system/presence";
    leaf augmented {
      type boolean;
    }
  }

  rpc activate-software-image {
    input {
      leaf image-name {
        type string;
      }
    }
    output {
      leaf status {
        type string;
      }
    }
  }

  notification link-failure {
    leaf if-name {
      type leafref {
        path "/interface/name";
      }
    }
  }

  deviation /system/user/uid {
    deviate not-supported;
  }
}
"#;
