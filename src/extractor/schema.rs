use roxmltree::Node;

pub const CFDI_NAMESPACE: &str = "http://www.sat.gob.mx/cfd/3";
pub const STAMP_NAMESPACE: &str = "http://www.sat.gob.mx/TimbreFiscalDigital";

/// Element layout of a document, chosen once from its `version` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaVariant {
    /// CFD 1.0, 2.0 and 2.2: unqualified element names.
    Cfd,
    /// CFDI 3.0 and 3.2: elements in the `cfdi` namespace plus a
    /// `tfd:TimbreFiscalDigital` stamp.
    Cfdi,
    Unsupported(String),
}

impl SchemaVariant {
    pub fn from_version(version: &str) -> Self {
        match version {
            "1.0" | "2.0" | "2.2" => SchemaVariant::Cfd,
            "3.0" | "3.2" => SchemaVariant::Cfdi,
            other => SchemaVariant::Unsupported(other.to_string()),
        }
    }

    /// First descendant of `root`, in document order, with the given local
    /// name in this variant's naming convention.
    pub fn find<'a, 'input>(
        &self,
        root: Node<'a, 'input>,
        local_name: &str,
    ) -> Option<Node<'a, 'input>> {
        root.descendants()
            .find(|node| node.is_element() && self.matches(node, local_name))
    }

    /// Transferred-tax element used when the aggregate tax total is empty.
    /// CFD documents have no such fallback.
    pub fn find_transfer<'a, 'input>(&self, root: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
        match self {
            SchemaVariant::Cfdi => self.find(root, "Traslado"),
            _ => None,
        }
    }

    pub fn find_stamp<'a, 'input>(&self, root: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
        match self {
            SchemaVariant::Cfdi => root.descendants().find(|node| {
                node.is_element()
                    && node.tag_name().name() == "TimbreFiscalDigital"
                    && node.tag_name().namespace() == Some(STAMP_NAMESPACE)
            }),
            _ => None,
        }
    }

    fn matches(&self, node: &Node, local_name: &str) -> bool {
        let tag = node.tag_name();
        if tag.name() != local_name {
            return false;
        }

        match self {
            SchemaVariant::Cfd => true,
            SchemaVariant::Cfdi => tag.namespace() == Some(CFDI_NAMESPACE),
            SchemaVariant::Unsupported(_) => false,
        }
    }
}

impl std::fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaVariant::Cfd => write!(f, "CFD"),
            SchemaVariant::Cfdi => write!(f, "CFDI"),
            SchemaVariant::Unsupported(version) => write!(f, "unsupported ({})", version),
        }
    }
}
