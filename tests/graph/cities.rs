use std::sync::LazyLock;

use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};
use waypoint::{Distance, Graph, GraphBuilder, NodeId};

pub static CITY_GRAPH: LazyLock<CityGraph> = LazyLock::new(CityGraph::new);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum City {
    #[strum(to_string = "San Francisco")]
    SanFrancisco,
    #[strum(to_string = "Los Angeles")]
    LosAngeles,
    Dallas,
    #[strum(to_string = "New York")]
    NewYork,
    Chicago,
}

pub struct CityGraph {
    pub graph: Graph,
    ids: Vec<NodeId>,
}

impl CityGraph {
    fn new() -> Self {
        use City::*;

        let mut builder = GraphBuilder::default();
        let ids: Vec<_> = City::iter()
            .map(|city| builder.add_node(city.to_string()))
            .collect();

        let roads = [
            (SanFrancisco, LosAngeles, 347),
            (SanFrancisco, Dallas, 1_480),
            (SanFrancisco, Chicago, 1_853),
            (LosAngeles, Dallas, 1_237),
            (Dallas, Chicago, 802),
            (Dallas, NewYork, 1_370),
            (Chicago, NewYork, 712),
        ];

        for (a, b, units) in roads {
            builder
                .add_bidirectional_edge(
                    ids[a as usize],
                    ids[b as usize],
                    Distance::from_units(units),
                )
                .unwrap();
        }

        Self {
            graph: builder.build(),
            ids,
        }
    }

    pub fn id(&self, city: City) -> NodeId {
        self.ids[city as usize]
    }

    pub fn name(&self, node: NodeId) -> &str {
        self.graph.node(node).unwrap().name()
    }
}
